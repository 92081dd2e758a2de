//! Cache manager for rendered standings
//!
//! Provides a `CacheManager` that keeps rendered artifacts in memory with
//! expiry timestamps. Expired entries are treated exactly like missing ones.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

/// Default time-to-live for cached artifacts (24 hours)
pub const DEFAULT_TTL_SECS: u64 = 86_400;

/// A cached artifact with its lifetime
#[derive(Debug, Clone)]
struct CacheEntry {
    /// The cached artifact
    value: Arc<str>,
    /// When the artifact was cached
    cached_at: DateTime<Utc>,
    /// When the artifact stops being served
    expires_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Process-wide store of rendered artifacts keyed by name
///
/// Readers get a shared handle to the stored string, so a `write` replaces
/// the entry wholesale and never disturbs a value a reader already holds.
/// Construct one at startup and share it behind an `Arc`.
#[derive(Debug)]
pub struct CacheManager {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new(std::time::Duration::from_secs(DEFAULT_TTL_SECS))
    }
}

impl CacheManager {
    /// Creates an empty cache whose entries live for `ttl`
    pub fn new(ttl: std::time::Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: to_chrono(ttl),
        }
    }

    /// The lifetime given to entries stored with [`CacheManager::write`]
    pub fn ttl(&self) -> std::time::Duration {
        self.ttl.to_std().unwrap_or_default()
    }

    /// Stores `value` under `key` with the default TTL, replacing any previous entry
    pub fn write(&self, key: &str, value: impl Into<Arc<str>>) {
        self.insert(key, value.into(), self.ttl);
    }

    /// Stores `value` under `key` with a specific TTL
    pub fn write_with_ttl(&self, key: &str, value: impl Into<Arc<str>>, ttl: std::time::Duration) {
        self.insert(key, value.into(), to_chrono(ttl));
    }

    fn insert(&self, key: &str, value: Arc<str>, ttl: Duration) {
        let now = Utc::now();
        let entry = CacheEntry {
            value,
            cached_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        };

        let mut entries = self.entries.write();
        entries.retain(|_, e| !e.is_expired(now));
        entries.insert(key.to_string(), entry);
    }

    /// Reads a fresh entry
    ///
    /// Returns `None` if the key was never written or its entry has expired.
    pub fn read(&self, key: &str) -> Option<Arc<str>> {
        self.read_entry(key).map(|e| e.value)
    }

    /// When the fresh entry under `key` was cached
    pub fn cached_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.read_entry(key).map(|e| e.cached_at)
    }

    fn read_entry(&self, key: &str) -> Option<CacheEntry> {
        let entries = self.entries.read();
        entries
            .get(key)
            .filter(|e| !e.is_expired(Utc::now()))
            .cloned()
    }
}

/// Converts a TTL, saturating at chrono's maximum duration
fn to_chrono(ttl: std::time::Duration) -> Duration {
    Duration::from_std(ttl).unwrap_or(Duration::MAX)
}
