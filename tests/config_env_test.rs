//! Startup configuration read from the process environment, and the log
//! file it points at.
//!
//! These tests mutate process-wide state (environment variables and the
//! global tracing subscriber), so they run serially.

use std::time::Duration;

use dockdeck::config::{
    DashboardConfig, CACHE_CLEANUP_ENV, LOG_ENV, OUTBOX_CAPACITY_ENV, PRUNE_TTL_ENV,
};
use dockdeck::logging;
use serial_test::serial;
use tempfile::TempDir;

const ALL_VARS: [&str; 4] = [LOG_ENV, PRUNE_TTL_ENV, CACHE_CLEANUP_ENV, OUTBOX_CAPACITY_ENV];

fn clear_env() {
    for var in ALL_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_without_variables_uses_defaults() {
    clear_env();

    let config = DashboardConfig::from_env();

    assert_eq!(config, DashboardConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_every_variable() {
    clear_env();
    std::env::set_var(PRUNE_TTL_ENV, "120");
    std::env::set_var(CACHE_CLEANUP_ENV, "5");
    std::env::set_var(OUTBOX_CAPACITY_ENV, "16");
    std::env::set_var(LOG_ENV, "dockdeck=debug");

    let config = DashboardConfig::from_env();
    clear_env();

    assert_eq!(config.prune_report_ttl, Duration::from_secs(120));
    assert_eq!(config.cache_cleanup_interval, Duration::from_secs(5));
    assert_eq!(config.outbox_capacity, 16);
    assert_eq!(config.log_filter, "dockdeck=debug");
}

#[test]
#[serial]
fn test_from_env_ignores_malformed_values() {
    clear_env();
    std::env::set_var(PRUNE_TTL_ENV, "soon");
    std::env::set_var(CACHE_CLEANUP_ENV, "0");
    std::env::set_var(OUTBOX_CAPACITY_ENV, "-3");

    let config = DashboardConfig::from_env();
    clear_env();

    let defaults = DashboardConfig::default();
    assert_eq!(config.prune_report_ttl, defaults.prune_report_ttl);
    assert_eq!(config.cache_cleanup_interval, defaults.cache_cleanup_interval);
    assert_eq!(config.outbox_capacity, defaults.outbox_capacity);
}

#[test]
#[serial]
fn test_logging_init_writes_to_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("dockdeck.log");
    let config = DashboardConfig::default()
        .with_log_file(&path)
        .with_log_filter("info");

    let written_to = logging::init(&config).expect("first init installs the subscriber");
    assert_eq!(written_to, path);
    tracing::info!("hello from the test");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("logging to"));
    assert!(contents.contains("hello from the test"));

    // The global subscriber can only be installed once per process.
    assert!(logging::init(&config).is_err());
}
