//! Async actions: gateway calls that conditionally update the store.
//!
//! Each action returns a bare success flag; gateway errors are logged and
//! absorbed here so no error type crosses into the controller. Mutations
//! never patch the store — the caller re-issues [`UserActions::list`] so the
//! client can never diverge from server-assigned fields.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::gateway::ApiGateway;
use crate::model::UserRecord;
use crate::store::entity::EntityStore;
use crate::store::reducer::StoreAction;
use crate::store::state::USER_COLLECTION;

/// Gateway + store bundle the controller drives.
#[derive(Clone)]
pub struct UserActions {
    gateway: ApiGateway,
    store: EntityStore,
    /// Monotonic stamp for list calls. A resolving response is applied
    /// only if it is still the most recently issued one, so a slow stale
    /// response cannot clobber a fresher snapshot.
    list_seq: Arc<AtomicU64>,
}

impl UserActions {
    pub fn new(gateway: ApiGateway, store: EntityStore) -> Self {
        Self {
            gateway,
            store,
            list_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Fetch the user collection and replace the store's snapshot.
    ///
    /// On any gateway error the store is left untouched — stale-but-valid
    /// data beats an empty screen. Returns whether the fetch succeeded;
    /// a successful fetch that lost the race to a newer list call still
    /// returns true but does not touch the store.
    pub async fn list(&self) -> bool {
        let seq = self.list_seq.fetch_add(1, Ordering::SeqCst) + 1;
        match self.gateway.list_users().await {
            Ok(records) => {
                if self.list_seq.load(Ordering::SeqCst) != seq {
                    tracing::debug!(seq, "dropping stale user list response");
                    return true;
                }
                self.store.dispatch(StoreAction::ListSucceeded {
                    collection: USER_COLLECTION.to_string(),
                    records,
                });
                true
            }
            Err(error) => {
                tracing::warn!(%error, "user list failed, keeping previous snapshot");
                false
            }
        }
    }

    /// Register a new user. Observing the created record requires a
    /// follow-up [`Self::list`].
    pub async fn create(&self, record: &UserRecord) -> bool {
        match self.gateway.create_user(record).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "user create failed");
                false
            }
        }
    }

    /// Replace a user record by id. Same re-fetch contract as create.
    pub async fn edit(&self, id: &str, record: &UserRecord) -> bool {
        match self.gateway.update_user(id, record).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, id, "user edit failed");
                false
            }
        }
    }

    /// Delete a user record by id. Same re-fetch contract as create.
    pub async fn delete(&self, id: &str) -> bool {
        match self.gateway.delete_user(id).await {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, id, "user delete failed");
                false
            }
        }
    }
}
