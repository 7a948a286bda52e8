//! dockdeck - a terminal dashboard for a container-runtime daemon
//!
//! This library exposes modules for use in the binary and integration tests.

pub mod adapters;
pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;

mod lock;
