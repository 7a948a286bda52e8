//! Trait abstractions for dependency injection and testability.
//!
//! The dashboard core talks to the outside world only through these seams.
//!
//! # Traits
//!
//! - [`DaemonGateway`] - container daemon queries, mutations and events
//! - [`Refresh`] - the "redraw the screen" side effect

pub mod daemon;
pub mod events;
pub mod refresh;

pub use daemon::{DaemonGateway, LogStream};
pub use events::{CancelHandle, CancelToken, EventSubscription};
pub use refresh::Refresh;
