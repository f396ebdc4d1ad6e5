//! List-state controller for the user screen.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ListController;
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{FilterUpdate, ListViewState, DEFAULT_ROWS_PER_PAGE};
