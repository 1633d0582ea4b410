//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their age.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached payload and the moment it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// Insertion time, never touched by reads
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion time.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has reached `ttl` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly counts
    /// as expired.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) >= ttl
    }
}
