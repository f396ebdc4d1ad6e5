//! Explicitly-owned entity store.
//!
//! Single source of truth for fetched collections. Not a hidden global:
//! construct one, clone handles into consumers, and tear it down with the
//! screen. All mutation goes through [`EntityStore::dispatch`], which
//! applies the pure reducer and then notifies subscribers.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::model::UserRecord;
use crate::store::reducer::{reduce, StoreAction};
use crate::store::state::Collections;

/// Shared handle to the entity store. Cheap to clone.
#[derive(Clone)]
pub struct EntityStore {
    inner: Arc<RwLock<Collections>>,
    version: Arc<watch::Sender<u64>>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(Collections::new())),
            version: Arc::new(tx),
        }
    }

    /// Apply an action through the reducer and notify subscribers.
    ///
    /// This is the only write path into the store.
    pub fn dispatch(&self, action: StoreAction) {
        tracing::debug!(?action, "dispatching store action");
        {
            let mut guard = self.inner.write();
            let state = std::mem::take(&mut *guard);
            *guard = reduce(state, action);
        }
        self.version.send_modify(|v| *v += 1);
    }

    /// Subscribe to snapshot changes.
    ///
    /// The receiver yields a monotonically increasing version number;
    /// subscribers re-read the snapshot they care about on each change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Current records for a collection. Empty if never fetched.
    pub fn snapshot(&self, collection: &str) -> Vec<UserRecord> {
        self.inner
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop all collections. Used on screen teardown; subscribers are
    /// notified once more so they can release derived state.
    pub fn teardown(&self) {
        self.inner.write().clear();
        self.version.send_modify(|v| *v += 1);
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
