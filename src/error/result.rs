//! Result alias for façade operations.

use super::DashboardError;

/// Result type for operations that can fail with a [`DashboardError`].
pub type DashboardResult<T> = Result<T, DashboardError>;
