use crate::list::intent::ListIntent;
use crate::list::state::ListViewState;
use crate::mvi::Reducer;

pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::SetFilters(update) => {
                update.merge_into(&mut state.filters);
                state.page = 0;
                state
            }
            ListIntent::SetSort(field) => {
                if state.sort_by == field {
                    state.sort_direction = state.sort_direction.toggled();
                } else {
                    state.sort_by = field;
                    state.sort_direction = Default::default();
                }
                state
            }
            ListIntent::SetPage(page) => {
                state.page = page;
                state
            }
            ListIntent::SetRowsPerPage(rows) => {
                if rows > 0 {
                    state.rows_per_page = rows;
                    state.page = 0;
                }
                state
            }
            ListIntent::SetDense(dense) => {
                state.dense = dense;
                state
            }
            ListIntent::ToggleSelect(id) => {
                if !state.selected.remove(&id) {
                    state.selected.insert(id);
                }
                state
            }
            ListIntent::SelectAll { ids, checked } => {
                state.selected = if checked {
                    ids.into_iter().collect()
                } else {
                    Default::default()
                };
                state
            }
            ListIntent::ClearSelection => {
                state.selected.clear();
                state
            }
            ListIntent::RecordsDeleted { ids } => {
                for id in &ids {
                    state.selected.remove(id);
                }
                state
            }
        }
    }
}
