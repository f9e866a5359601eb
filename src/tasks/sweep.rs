//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::TtlStore;

/// Spawns a background task that periodically purges expired entries.
///
/// The sweep is a memory-reclamation optimization, never a correctness
/// dependency: the store's read path already refuses expired entries, so a
/// slow or stalled sweep can only cost memory, not staleness. Each pass
/// takes the store's write lock once, for the duration of a single scan.
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `interval` - Wall-clock delay between passes
///
/// # Returns
/// A JoinHandle for the spawned task; abort it to stop sweeping during
/// shutdown. The task itself never exits on its own.
///
/// # Example
/// ```ignore
/// let store = Arc::new(TtlStore::new());
/// let sweep_handle = spawn_sweep_task(store.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V>(store: Arc<TtlStore<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!("starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = store.purge_expired().await;

            if removed > 0 {
                info!(removed, "TTL sweep removed expired entries");
            } else {
                debug!("TTL sweep found no expired entries");
            }
        }
    })
}
