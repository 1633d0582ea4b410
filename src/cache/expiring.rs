//! Expiring Cache Module
//!
//! Thread-safe handle around `CacheStore` that owns the background sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::cache::{CacheStore, MAX_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL};
use crate::tasks::spawn_sweep_task;

// == Expiring Cache ==
/// A key/value cache whose entries are removed once they reach a fixed TTL.
///
/// One mutex guards the whole map; `add`, `get` and each sweep pass hold it
/// for their entire critical section. Reads never check age, so an entry can
/// outlive its TTL by up to one sweep interval.
///
/// Share it by reference or behind an `Arc`. Call [`ExpiringCache::close`]
/// during teardown to wait for the sweep task to finish.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Shared storage, also held by the sweep task
    store: Arc<Mutex<CacheStore>>,
    /// Age at which entries are swept
    ttl: Duration,
    /// Time between sweep passes
    sweep_interval: Duration,
    /// Stop signal for the sweep task
    shutdown: watch::Sender<bool>,
    /// Sweep task handle, taken by `close`
    sweep: Mutex<Option<JoinHandle<()>>>,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// `ttl` is both the expiry threshold and the sweep interval.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_sweep_interval(ttl, ttl)
    }

    /// Creates an empty cache whose sweep runs every `sweep_interval`
    /// instead of every `ttl`.
    ///
    /// The interval is clamped to [`MIN_SWEEP_INTERVAL`]..=[`MAX_SWEEP_INTERVAL`].
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn with_sweep_interval(ttl: Duration, sweep_interval: Duration) -> Self {
        let sweep_interval = sweep_interval.clamp(MIN_SWEEP_INTERVAL, MAX_SWEEP_INTERVAL);
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown, shutdown_rx) = watch::channel(false);
        let handle = spawn_sweep_task(store.clone(), ttl, sweep_interval, shutdown_rx);

        Self {
            store,
            ttl,
            sweep_interval,
            shutdown,
            sweep: Mutex::new(Some(handle)),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, stamping it with the
    /// current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        let mut store = self.store.lock().await;
        store.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the value stored for `key`, if present.
    ///
    /// An entry older than the TTL is still returned until a sweep pass
    /// removes it.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.lock().await;
        store.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Returns the TTL this cache was built with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the effective time between sweep passes.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    // == Close ==
    /// Stops the sweep task and waits for it to exit.
    ///
    /// Safe to call more than once. `add` and `get` keep working afterwards,
    /// but nothing expires any more.
    pub async fn close(&self) {
        self.shutdown.send_replace(true);

        let handle = self.sweep.lock().await.take();
        if let Some(handle) = handle {
            match handle.await {
                Ok(()) => debug!("Sweep task joined"),
                Err(e) => warn!("Sweep task ended abnormally: {}", e),
            }
        }
    }
}

impl Drop for ExpiringCache {
    fn drop(&mut self) {
        // The task also exits once the sender is dropped
        self.shutdown.send_replace(true);
    }
}
