//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ChannelRefresher`] - refresh side effect delivered to the render loop
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockDaemon`] - in-memory daemon with failure and event injection
//! - [`mock::RecordingRefresher`] - counts refreshes

pub mod channel_refresh;
pub mod mock;

pub use channel_refresh::ChannelRefresher;
pub use mock::{MockDaemon, MockOperation, RecordingRefresher};
