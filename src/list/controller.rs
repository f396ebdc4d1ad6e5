//! Side-effectful shell around the list reducer.
//!
//! Owns the ephemeral [`ListViewState`], drives [`UserActions`], and
//! derives the visible row subset from the store snapshot on demand.
//! Remote failures never surface as errors here; they become a single
//! [`Notice`] and the existing state stays untouched.

use tokio::sync::watch;

use crate::list::intent::ListIntent;
use crate::list::reducer::ListReducer;
use crate::list::state::{FilterUpdate, ListViewState};
use crate::model::UserRecord;
use crate::mvi::Reducer;
use crate::notify::{Notice, NoticeSender};
use crate::store::{UserActions, USER_COLLECTION};
use crate::table::{
    apply_filter, empty_rows, get_comparator, not_found, row_in_page, status_tabs, SortField,
    StatusTab,
};

pub struct ListController {
    actions: UserActions,
    state: ListViewState,
    notices: NoticeSender,
}

impl ListController {
    pub fn new(actions: UserActions, notices: NoticeSender) -> Self {
        Self {
            actions,
            state: ListViewState::default(),
            notices,
        }
    }

    /// Current view state, for the presentation layer to render from.
    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    /// Store change notifications, so the presentation layer can re-render
    /// when a fetch lands.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.actions.store().subscribe()
    }

    // ---- view-state operations (pure, via the reducer) ----

    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.apply(ListIntent::SetFilters(update));
    }

    pub fn set_sort(&mut self, field: SortField) {
        self.apply(ListIntent::SetSort(field));
    }

    pub fn set_page(&mut self, page: usize) {
        self.apply(ListIntent::SetPage(page));
    }

    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.apply(ListIntent::SetRowsPerPage(rows));
    }

    pub fn set_dense(&mut self, dense: bool) {
        self.apply(ListIntent::SetDense(dense));
    }

    pub fn toggle_select(&mut self, id: impl Into<String>) {
        self.apply(ListIntent::ToggleSelect(id.into()));
    }

    pub fn select_all(&mut self, ids: Vec<String>, checked: bool) {
        self.apply(ListIntent::SelectAll { ids, checked });
    }

    pub fn clear_selection(&mut self) {
        self.apply(ListIntent::ClearSelection);
    }

    fn apply(&mut self, intent: ListIntent) {
        self.state = ListReducer::reduce(self.state.clone(), intent);
    }

    // ---- derived views ----

    /// The filtered, sorted result set (all pages).
    pub fn filtered(&self) -> Vec<UserRecord> {
        let snapshot = self.actions.store().snapshot(USER_COLLECTION);
        apply_filter(
            &snapshot,
            &self.state.filters,
            get_comparator(self.state.sort_direction, self.state.sort_by),
        )
    }

    /// The rows for the current page.
    pub fn visible_rows(&self) -> Vec<UserRecord> {
        row_in_page(&self.filtered(), self.state.page, self.state.rows_per_page)
    }

    /// Status tabs with counts over the full, unfiltered snapshot.
    pub fn status_tabs(&self) -> Vec<StatusTab> {
        status_tabs(&self.actions.store().snapshot(USER_COLLECTION))
    }

    /// True when the filtered set is empty (renders the empty-state row).
    pub fn not_found(&self) -> bool {
        not_found(&self.filtered())
    }

    /// Padding-row count for the current page.
    pub fn empty_rows(&self) -> usize {
        empty_rows(
            self.state.page,
            self.state.rows_per_page,
            self.filtered().len(),
        )
    }

    // ---- remote operations ----

    /// Fetch the collection into the store. Called on mount and after
    /// every successful mutation.
    pub async fn refresh(&mut self) -> bool {
        let ok = self.actions.list().await;
        if !ok {
            self.notify(Notice::error("Failed to fetch users"));
        }
        ok
    }

    /// Register a new user, then re-fetch so the server-assigned fields
    /// become visible.
    pub async fn create(&mut self, record: &UserRecord) -> bool {
        if self.actions.create(record).await {
            self.notify(Notice::success("Create success!"));
            self.refresh().await;
            true
        } else {
            self.notify(Notice::error("Failed to create user"));
            false
        }
    }

    /// Replace a record by id, then re-fetch.
    pub async fn edit(&mut self, id: &str, record: &UserRecord) -> bool {
        if self.actions.edit(id, record).await {
            self.notify(Notice::success("Update success!"));
            self.refresh().await;
            true
        } else {
            self.notify(Notice::error("Failed to update user"));
            false
        }
    }

    /// Delete one record. The id is dropped from the selection on success,
    /// and the list is re-fetched regardless of the outcome so the view
    /// reflects whatever the server now holds.
    pub async fn delete_one(&mut self, id: &str) -> bool {
        let ok = self.actions.delete(id).await;
        if ok {
            self.apply(ListIntent::RecordsDeleted {
                ids: vec![id.to_string()],
            });
            self.notify(Notice::success("Delete success!"));
        } else {
            self.notify(Notice::error("Failed to delete user"));
        }
        self.refresh().await;
        ok
    }

    /// Delete every selected record, one at a time. Sequential on purpose:
    /// a partial failure leaves an unambiguous prefix deleted. Emits a
    /// single summary notice and re-fetches once at the end.
    pub async fn delete_selected(&mut self) -> bool {
        let targets: Vec<String> = self.state.selected.iter().cloned().collect();
        if targets.is_empty() {
            return true;
        }

        let mut deleted = Vec::new();
        let mut failed = 0usize;
        for id in &targets {
            if self.actions.delete(id).await {
                deleted.push(id.clone());
            } else {
                failed += 1;
            }
        }

        self.apply(ListIntent::RecordsDeleted { ids: deleted });
        if failed == 0 {
            self.notify(Notice::success("Delete success!"));
        } else {
            self.notify(Notice::error(format!(
                "Failed to delete {failed} of {} users",
                targets.len()
            )));
        }
        self.refresh().await;
        failed == 0
    }

    fn notify(&self, notice: Notice) {
        // Err only means the presentation layer is gone.
        let _ = self.notices.send(notice);
    }
}
