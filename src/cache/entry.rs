//! Cache keys, values and entries.

use std::sync::Arc;

use tokio::time::Instant;

use crate::models::PruneReport;

/// Identifies a cached operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    PruneReport,
}

/// A cached operation result.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    PruneReport(Arc<PruneReport>),
}

impl CachedValue {
    /// The key this value is stored under.
    pub fn key(&self) -> CacheKey {
        match self {
            CachedValue::PruneReport(_) => CacheKey::PruneReport,
        }
    }
}

#[derive(Debug)]
pub(super) struct CacheEntry {
    value: CachedValue,
    expires_at: Instant,
}

impl CacheEntry {
    pub(super) fn new(value: CachedValue, expires_at: Instant) -> Self {
        Self { value, expires_at }
    }

    pub(super) fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub(super) fn value(&self) -> &CachedValue {
        &self.value
    }

    pub(super) fn into_value(self) -> CachedValue {
        self.value
    }
}
