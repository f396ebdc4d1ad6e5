//! Entity store: single source of truth for fetched collections,
//! plus the async actions that feed it.

mod actions;
mod entity;
mod reducer;
mod state;

pub use actions::UserActions;
pub use entity::EntityStore;
pub use reducer::{reduce, StoreAction};
pub use state::{Collections, USER_COLLECTION};
