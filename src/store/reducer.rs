//! Pure reducer for the entity store.

use crate::model::UserRecord;
use crate::store::state::Collections;

/// Named transitions for the entity store.
///
/// Mutations (create/edit/delete) deliberately have no action here: they
/// succeed or fail at the gateway and the caller re-issues a list, so the
/// store can never drift from server-assigned fields.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Replace a collection wholesale with a fresh list response,
    /// preserving server order.
    ListSucceeded {
        collection: String,
        records: Vec<UserRecord>,
    },
}

/// Apply an action to the store state.
///
/// Pure: same `(state, action)` always yields structurally-equal output.
pub fn reduce(mut state: Collections, action: StoreAction) -> Collections {
    match action {
        StoreAction::ListSucceeded {
            collection,
            records,
        } => {
            state.insert(collection, records);
            state
        }
    }
}
