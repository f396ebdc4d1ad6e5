use crate::list::state::FilterUpdate;
use crate::mvi::Intent;
use crate::table::SortField;

/// User actions and mutation results processed by the list reducer.
#[derive(Debug, Clone)]
pub enum ListIntent {
    /// Merge a partial filter update; always resets to the first page so a
    /// narrowed result set can't land on an empty page.
    SetFilters(FilterUpdate),
    /// Sort by a column: toggles direction when it is already the active
    /// column, otherwise sorts ascending by the new one.
    SetSort(SortField),
    SetPage(usize),
    /// Change the page size; resets to the first page. A zero value is
    /// rejected and leaves the state unchanged.
    SetRowsPerPage(usize),
    SetDense(bool),
    ToggleSelect(String),
    /// Checked replaces the selection with `ids`; unchecked clears it.
    SelectAll { ids: Vec<String>, checked: bool },
    ClearSelection,
    /// Rows were deleted remotely; drop exactly these ids from the
    /// selection. Ids merely hidden by filters are not touched.
    RecordsDeleted { ids: Vec<String> },
}

impl Intent for ListIntent {}
