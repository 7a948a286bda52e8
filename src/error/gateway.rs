//! Failures reported by the daemon gateway.

use thiserror::Error;

use crate::models::ResourceKind;

/// A daemon call failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// No object at the given visible row.
    #[error("there is no {kind} at position {position}")]
    PositionOutOfRange { kind: ResourceKind, position: usize },

    /// The daemon does not know the object.
    #[error("no such {kind}: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// The daemon could not be reached.
    #[error("daemon unavailable: {0}")]
    Unavailable(String),

    /// The daemon rejected the request.
    #[error("{0}")]
    Daemon(String),

    /// The gateway gave up waiting for the daemon.
    #[error("{operation} timed out")]
    Timeout { operation: String },

    /// Subscribing to daemon events failed.
    #[error("could not subscribe to daemon events: {0}")]
    Subscription(String),
}

impl GatewayError {
    /// Whether repeating the call could succeed without user action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::Unavailable(_)
                | GatewayError::Timeout { .. }
                | GatewayError::Subscription(_)
        )
    }
}
