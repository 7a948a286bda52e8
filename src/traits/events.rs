//! Daemon event subscription and its cancellation handle.

use tokio::sync::{mpsc, watch};

use crate::models::DaemonEvent;

/// A live subscription to daemon events.
pub struct EventSubscription {
    /// Events in arrival order; yields `None` once the producer stops.
    pub events: mpsc::Receiver<DaemonEvent>,
    /// Stops the producer. Owned by whoever is responsible for shutdown.
    pub cancel: CancelHandle,
}

impl EventSubscription {
    pub fn new(events: mpsc::Receiver<DaemonEvent>, cancel: CancelHandle) -> Self {
        Self { events, cancel }
    }
}

/// Owning side of a cancellation signal.
///
/// [`cancel`](CancelHandle::cancel) consumes the handle, so a subscription
/// can be cancelled at most once. Dropping the handle without cancelling
/// also releases every [`CancelToken`].
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Create a handle together with a first token.
    pub fn new() -> (Self, CancelToken) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, CancelToken { rx })
    }

    /// Another token observing this handle.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }

    pub fn cancel(self) {
        self.tx.send_replace(true);
    }
}

/// Observing side of a cancellation signal.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// Resolves once the handle is cancelled or dropped.
    pub async fn cancelled(&mut self) {
        // Err means the handle is gone, which also ends the subscription.
        let _ = self.rx.wait_for(|cancelled| *cancelled).await;
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }
}
