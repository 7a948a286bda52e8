//! Short-lived cache for results of slow daemon operations.
//!
//! Holds the last computed value of operations such as prune so readers that
//! poll it (the disk-usage screen) get that value without re-running the
//! operation. Entries expire individually; an expired entry reads as absent.
//!
//! Keys and values are typed: [`CachedValue`] determines its own
//! [`CacheKey`], so a lookup can never yield a value of the wrong kind.

mod entry;

pub use entry::{CacheKey, CachedValue};

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::lock;
use crate::models::PruneReport;
use entry::CacheEntry;

/// How long a prune report stays readable after the prune that produced it.
pub const PRUNE_REPORT_TTL: Duration = Duration::from_secs(30);

/// Interval at which the janitor drops expired entries.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(30);

/// Key-value store with per-entry expiration.
///
/// Internally synchronized; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under its key for `ttl`, replacing any previous value
    /// and its expiration.
    pub fn put(&self, value: CachedValue, ttl: Duration) {
        let key = value.key();
        let entry = CacheEntry::new(value, Instant::now() + ttl);
        lock::write(&self.entries).insert(key, entry);
    }

    /// The live value under `key`, if any.
    pub fn get(&self, key: CacheKey) -> Option<CachedValue> {
        let now = Instant::now();
        lock::read(&self.entries)
            .get(&key)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.value().clone())
    }

    /// The last prune report, if one is still live.
    pub fn prune_report(&self) -> Option<Arc<PruneReport>> {
        match self.get(CacheKey::PruneReport)? {
            CachedValue::PruneReport(report) => Some(report),
        }
    }

    pub fn remove(&self, key: CacheKey) -> Option<CachedValue> {
        lock::write(&self.entries)
            .remove(&key)
            .map(CacheEntry::into_value)
    }

    /// Drop expired entries; returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = lock::write(&self.entries);
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }

    /// Stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        lock::read(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Purge expired entries every `interval` until the cache is dropped or
    /// the returned task is aborted.
    pub fn spawn_janitor(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let cache: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(cache) = cache.upgrade() else {
                    break;
                };
                let purged = cache.purge_expired();
                if purged > 0 {
                    tracing::debug!("Result cache purged {} expired entries", purged);
                }
            }
        })
    }
}
