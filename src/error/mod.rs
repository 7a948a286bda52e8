//! Error types for the dashboard.
//!
//! - [`GatewayError`]: a daemon call failed
//! - [`DashboardError`]: what a façade operation reports, either a failed
//!   position lookup or a wrapped gateway failure
//! - [`DashboardResult`]: result alias used across the crate
//!
//! "Nothing found" in a cache or snapshot is not an error; those lookups
//! return `Option`.

mod dashboard;
mod gateway;
mod result;

pub use dashboard::DashboardError;
pub use gateway::GatewayError;
pub use result::DashboardResult;
