//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{CacheStore, MAX_SWEEP_INTERVAL};

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// Every `interval` the task takes the store lock once and removes each entry
/// whose age is at least `ttl`. The first sweep happens one full interval
/// after spawning.
///
/// The task stops when `true` is published on `shutdown` or when the sender
/// side of the channel is dropped.
///
/// # Panics
/// Panics if `interval` is zero, or if called outside a tokio runtime.
/// Intervals longer than [`MAX_SWEEP_INTERVAL`] are shortened to it.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let (stop_tx, stop_rx) = watch::channel(false);
/// let handle = spawn_sweep_task(store.clone(), ttl, ttl, stop_rx);
/// // Later, during shutdown:
/// stop_tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting TTL sweep task: ttl={:?}, interval={:?}",
            ttl, interval
        );

        let interval = interval.min(MAX_SWEEP_INTERVAL);
        let start = Instant::now()
            .checked_add(interval)
            .unwrap_or_else(Instant::now);
        let mut ticker = time::interval_at(start, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = {
                        let mut store_guard = store.lock().await;
                        store_guard.sweep_expired(ttl, Instant::now())
                    };

                    if removed > 0 {
                        info!("TTL sweep: removed {} expired entries", removed);
                    } else {
                        debug!("TTL sweep: no expired entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means every sender is gone
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("TTL sweep task stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new()))
    }

    #[tokio::test]
    async fn test_sweep_task_removes_expired_entries() {
        let store = shared_store();
        store
            .lock()
            .await
            .add("expire_soon".to_string(), b"value".to_vec());

        let (stop_tx, stop_rx) = watch::channel(false);
        let ttl = Duration::from_millis(100);
        let handle = spawn_sweep_task(store.clone(), ttl, ttl, stop_rx);

        // Entry reaches ttl at 100ms and is removed by the tick at 200ms at the latest
        time::sleep(Duration::from_millis(300)).await;

        assert!(
            store.lock().await.get("expire_soon").is_none(),
            "Expired entry should have been swept"
        );

        stop_tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_preserves_fresh_entries() {
        let store = shared_store();
        store
            .lock()
            .await
            .add("long_lived".to_string(), b"value".to_vec());

        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(
            store.clone(),
            Duration::from_secs(3600),
            Duration::from_millis(50),
            stop_rx,
        );

        // Several ticks run, none of them should touch a one-hour entry
        time::sleep(Duration::from_millis(200)).await;

        assert_eq!(
            store.lock().await.get("long_lived"),
            Some(b"value".to_vec()),
            "Fresh entry should not be removed"
        );

        stop_tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_stops_on_signal() {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(
            shared_store(),
            Duration::from_secs(60),
            Duration::from_secs(60),
            stop_rx,
        );

        stop_tx.send_replace(true);

        // Must return well before the first 60s tick
        time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweep task should stop promptly")
            .unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_stops_when_sender_dropped() {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(
            shared_store(),
            Duration::from_secs(60),
            Duration::from_secs(60),
            stop_rx,
        );

        drop(stop_tx);

        time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweep task should stop once the sender is gone")
            .unwrap();
    }

    #[tokio::test]
    async fn test_sweep_task_survives_max_interval() {
        let (stop_tx, stop_rx) = watch::channel(false);
        let handle = spawn_sweep_task(shared_store(), Duration::MAX, Duration::MAX, stop_rx);

        time::sleep(Duration::from_millis(50)).await;
        assert!(!handle.is_finished(), "sweep task should still be waiting");

        stop_tx.send_replace(true);
        time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweep task should stop promptly")
            .expect("sweep task should not panic");
    }
}
