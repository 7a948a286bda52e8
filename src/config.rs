//! Dashboard configuration.
//!
//! Defaults suit interactive use; every field can be overridden with a
//! builder method, and a few from the environment (see [`DashboardConfig::from_env`]).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{CLEANUP_INTERVAL, PRUNE_REPORT_TTL};
use crate::models::SortMode;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "DOCKDECK_LOG";
pub const PRUNE_TTL_ENV: &str = "DOCKDECK_PRUNE_TTL_SECS";
pub const CACHE_CLEANUP_ENV: &str = "DOCKDECK_CACHE_CLEANUP_SECS";
pub const OUTBOX_CAPACITY_ENV: &str = "DOCKDECK_OUTBOX_CAPACITY";

/// Configuration for a [`Dashboard`](crate::app::Dashboard) and the binary
/// around it.
///
/// # Example
///
/// ```ignore
/// use dockdeck::config::DashboardConfig;
/// use std::time::Duration;
///
/// let config = DashboardConfig::default()
///     .with_prune_report_ttl(Duration::from_secs(10))
///     .with_outbox_capacity(4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// How long a prune report stays readable (default: 30s)
    pub prune_report_ttl: Duration,
    /// How often expired cache entries are purged (default: 30s)
    pub cache_cleanup_interval: Duration,
    /// Undelivered status messages kept for the consumer (default: 0, strict rendezvous)
    pub outbox_capacity: usize,
    /// Network sort mode pushed to the daemon at startup
    pub initial_sort: SortMode,
    /// Tracing filter directive (default: "info")
    pub log_filter: String,
    /// Log file; `None` uses [`crate::logging::default_log_path`]
    pub log_file: Option<PathBuf>,
    /// Interval between synthetic events of the demo daemon (default: 5s)
    pub demo_event_interval: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            prune_report_ttl: PRUNE_REPORT_TTL,
            cache_cleanup_interval: CLEANUP_INTERVAL,
            outbox_capacity: 0,
            initial_sort: SortMode::default(),
            log_filter: "info".to_string(),
            log_file: None,
            demo_event_interval: Duration::from_secs(5),
        }
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prune_report_ttl(mut self, ttl: Duration) -> Self {
        self.prune_report_ttl = ttl;
        self
    }

    pub fn with_cache_cleanup_interval(mut self, interval: Duration) -> Self {
        self.cache_cleanup_interval = interval;
        self
    }

    pub fn with_outbox_capacity(mut self, capacity: usize) -> Self {
        self.outbox_capacity = capacity;
        self
    }

    pub fn with_initial_sort(mut self, mode: SortMode) -> Self {
        self.initial_sort = mode;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_demo_event_interval(mut self, interval: Duration) -> Self {
        self.demo_event_interval = interval;
        self
    }

    /// Defaults overridden by `DOCKDECK_*` environment variables.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = parse_var::<u64, _>(&lookup, PRUNE_TTL_ENV) {
            config.prune_report_ttl = Duration::from_secs(secs);
        }
        match parse_var::<u64, _>(&lookup, CACHE_CLEANUP_ENV) {
            Some(0) => {
                tracing::warn!("{} must be positive, using default", CACHE_CLEANUP_ENV);
            }
            Some(secs) => config.cache_cleanup_interval = Duration::from_secs(secs),
            None => {}
        }
        if let Some(capacity) = parse_var::<usize, _>(&lookup, OUTBOX_CAPACITY_ENV) {
            config.outbox_capacity = capacity;
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}
