//! Side channel for session-validity signals.
//!
//! A 401 from the API means the credential is no longer valid. The gateway
//! reports that here and nothing more; redirecting to a login screen or
//! clearing stored session state is a collaborator's job.

use tokio::sync::broadcast;

/// Session-validity events emitted by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The API rejected the current credential (HTTP 401).
    Expired,
}

/// Broadcast handle for session events.
///
/// Cheap to clone; every subscriber sees every event emitted after it
/// subscribed. Emitting with no subscribers is fine.
#[derive(Clone)]
pub struct SessionMonitor {
    tx: broadcast::Sender<SessionEvent>,
}

impl SessionMonitor {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.tx.subscribe()
    }

    pub(crate) fn notify_expired(&self) {
        // Err only means nobody is listening right now.
        let _ = self.tx.send(SessionEvent::Expired);
    }
}

impl Default for SessionMonitor {
    fn default() -> Self {
        Self::new()
    }
}
