//! Errors surfaced by façade operations.

use thiserror::Error;

use super::GatewayError;
use crate::models::ResourceKind;

/// A façade operation failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// A visible row could not be resolved to an object id.
    #[error("could not resolve {kind} at position {position}: {source}")]
    Resolution {
        kind: ResourceKind,
        position: usize,
        #[source]
        source: GatewayError,
    },

    /// A daemon call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl DashboardError {
    pub fn resolution(kind: ResourceKind, position: usize, source: GatewayError) -> Self {
        DashboardError::Resolution {
            kind,
            position,
            source,
        }
    }

    /// The underlying gateway failure.
    pub fn gateway_error(&self) -> &GatewayError {
        match self {
            DashboardError::Resolution { source, .. } => source,
            DashboardError::Gateway(err) => err,
        }
    }

    /// Status-line text describing what the user was trying to do.
    ///
    /// `action` reads as a gerund phrase, e.g. `"inspecting image"`.
    pub fn user_message(&self, action: &str) -> String {
        format!("Error {}: {}", action, self)
    }
}
