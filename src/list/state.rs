use std::collections::BTreeSet;

use crate::mvi::ViewState;
use crate::table::{SortDirection, SortField, StatusFilter, UserFilters};

/// Default page size, matching the table widget's smallest page option.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Ephemeral view state for the user list screen.
///
/// Created with defaults when the screen mounts, discarded when it
/// unmounts, never persisted. The selection is a set of record ids; ids
/// hidden by the current filters deliberately stay selected (see
/// [`crate::list::ListReducer`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub rows_per_page: usize,
    pub dense: bool,
    pub selected: BTreeSet<String>,
    pub filters: UserFilters,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            sort_by: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            dense: false,
            selected: BTreeSet::new(),
            filters: UserFilters::default(),
        }
    }
}

impl ViewState for ListViewState {}

/// Partial update merged into [`UserFilters`]. `None` fields keep their
/// current value.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub status: Option<StatusFilter>,
    pub search_term: Option<String>,
}

impl FilterUpdate {
    pub fn status(status: StatusFilter) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn search_term(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub(crate) fn merge_into(self, filters: &mut UserFilters) {
        if let Some(v) = self.first_name {
            filters.first_name = v;
        }
        if let Some(v) = self.last_name {
            filters.last_name = v;
        }
        if let Some(v) = self.email {
            filters.email = v;
        }
        if let Some(v) = self.mobile {
            filters.mobile = v;
        }
        if let Some(v) = self.status {
            filters.status = v;
        }
        if let Some(v) = self.search_term {
            filters.search_term = v;
        }
    }
}
