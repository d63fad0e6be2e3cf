//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlCache;

/// Spawns a background task that periodically removes expired entries.
///
/// The task sleeps for the interval, then takes the write lock just long
/// enough to run `cleanup()`. Reads already skip expired entries, so the
/// sweep only bounds memory held by entries nobody asks for again.
///
/// # Arguments
/// * `cache` - Shared reference to the cache
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task. The sweep cannot be cancelled other
/// than by aborting this handle.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(TtlCache::<String>::new(100, 3_600_000)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 3600);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(
    cache: Arc<RwLock<TtlCache<V>>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    spawn_cleanup_every(cache, Duration::from_secs(cleanup_interval_secs))
}

/// Same as [`spawn_cleanup_task`] with an arbitrary interval.
pub fn spawn_cleanup_every<V>(cache: Arc<RwLock<TtlCache<V>>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.write().await;
                let removed = cache_guard.cleanup();
                (removed, cache_guard.len())
            };

            if removed > 0 {
                info!(removed, remaining, "TTL cleanup removed expired entries");
            } else {
                debug!(remaining, "TTL cleanup: no expired entries found");
            }
        }
    })
}
