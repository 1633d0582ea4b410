//! Cache Store Module
//!
//! The plain key/value map behind the expiring cache. It knows nothing about
//! locking or scheduling; `ExpiringCache` wraps it in a mutex and the sweep
//! task calls `sweep_expired` on each tick.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key/value storage with per-entry creation timestamps.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Stores a value under `key`.
    ///
    /// If the key already exists, both the value and its creation time are
    /// replaced, so the entry's age restarts from zero.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Age is not checked here; stale entries stay readable until the next
    /// sweep removes them.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Sweep Expired ==
    /// Removes every entry whose age as of `now` is at least `ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self, ttl: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(ttl, now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
