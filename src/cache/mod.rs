//! Cache Module
//!
//! Provides an in-memory response cache whose entries expire after a fixed TTL.

mod entry;
mod expiring;
mod store;


use std::time::Duration;

// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use store::CacheStore;

// == Public Constants ==
/// Shortest sweep interval the cache will schedule
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Longest sweep interval the cache will schedule (365 days)
pub const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
