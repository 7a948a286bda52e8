//! Mock implementations for testing.
//!
//! These doubles let the dashboard run without a container daemon or a
//! terminal. The binary also uses [`MockDaemon::with_fixture`] as its
//! demo daemon.
//!
//! # Available Mocks
//!
//! - [`MockDaemon`] - in-memory daemon with failure and event injection
//! - [`RecordingRefresher`] - counts refreshes and lets tests await them
//! - [`spawn_demo_events`] - periodic synthetic events for the demo daemon

pub mod daemon;
pub mod demo;
mod fixture;
pub mod refresh;

pub use daemon::{MockDaemon, MockOperation};
pub use demo::spawn_demo_events;
pub use refresh::RecordingRefresher;
