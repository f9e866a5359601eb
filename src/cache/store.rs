//! TTL Store Module
//!
//! Concurrency-safe keyed store with per-entry TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::CacheEntry;

// == TTL Store ==
/// Keyed in-memory store with per-entry TTL expiration.
///
/// Expiration is checked lazily on every read, which is the authoritative
/// guard against stale data; the periodic sweep (`tasks::spawn_sweep_task`)
/// only reclaims memory and is never a correctness dependency. There is no
/// capacity bound: growth is limited only by entry TTLs, a known limitation.
///
/// The store is shared as `Arc<TtlStore<V>>` and injected into its consumers;
/// all methods take `&self` and synchronize internally. Readers proceed
/// concurrently with each other and are only excluded by writers.
#[derive(Debug)]
pub struct TtlStore<V> {
    /// Key-value storage
    entries: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V: Clone> TtlStore<V> {
    // == Constructor ==
    /// Creates a new, empty store.
    ///
    /// The store itself never spawns background work; pair it with
    /// `tasks::spawn_sweep_task` to reclaim expired entries over time.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    // == Get ==
    /// Retrieves a clone of the value for `key`.
    ///
    /// Returns `None` if the key is absent or its entry has expired as of the
    /// call time. Discovering an expired entry does not mutate the store:
    /// removal is left to an overwriting `set` or the background sweep, so
    /// reads only ever take the shared lock.
    pub async fn get(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => Some(entry.value.clone()),
            _ => None,
        }
    }

    // == Set ==
    /// Inserts or overwrites the entry for `key`, expiring `ttl` from now.
    ///
    /// Repeated sets for the same key are last-write-wins; there is no merge.
    /// A zero `ttl` stores an entry that is already expired rather than one
    /// that never expires.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        debug!(%key, ?ttl, "setting cache entry");
        let entry = CacheEntry::new(value, ttl);
        let mut entries = self.entries.write().await;
        entries.insert(key, entry);
    }

    // == Delete ==
    /// Removes the entry for `key` if present; a no-op when absent.
    pub async fn delete(&self, key: &str) {
        debug!(%key, "deleting cache entry");
        let mut entries = self.entries.write().await;
        entries.remove(key);
    }

    // == Purge Expired ==
    /// Removes all expired entries, returning how many were removed.
    ///
    /// Holds the write lock for a single pass over the map.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of physically present entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries at all.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl<V: Clone> Default for TtlStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::advance;

    const TTL: Duration = Duration::from_secs(300);

    #[tokio::test]
    async fn test_store_new_is_empty() {
        let store: TtlStore<String> = TtlStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_store_set_and_get() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), TTL).await;

        assert_eq!(store.get("key1").await, Some("value1".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_get_nonexistent() {
        let store: TtlStore<String> = TtlStore::new();

        assert_eq!(store.get("nonexistent").await, None);
    }

    #[tokio::test]
    async fn test_store_overwrite_is_last_write_wins() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), TTL).await;
        store.set("key1", "value2".to_string(), TTL).await;

        assert_eq!(store.get("key1").await, Some("value2".to_string()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_delete() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), TTL).await;
        store.delete("key1").await;

        assert!(store.is_empty().await);
        assert_eq!(store.get("key1").await, None);
    }

    #[tokio::test]
    async fn test_store_delete_absent_is_noop() {
        let store = TtlStore::new();
        store.set("key1", "value1".to_string(), TTL).await;

        store.delete("nonexistent").await;

        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_ttl_expiration() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), Duration::from_secs(1)).await;

        assert_eq!(store.get("key1").await, Some("value1".to_string()));

        advance(Duration::from_millis(1100)).await;

        assert_eq!(store.get("key1").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_zero_ttl_never_readable() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), Duration::ZERO).await;

        assert_eq!(store.get("key1").await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_get_does_not_remove_expired() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), Duration::from_secs(1)).await;
        advance(Duration::from_secs(2)).await;

        // Lazy expiry hides the entry but leaves removal to the sweep
        assert_eq!(store.get("key1").await, None);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_overwrite_resets_expiration() {
        let store = TtlStore::new();

        store.set("key1", "value1".to_string(), Duration::from_secs(1)).await;
        advance(Duration::from_secs(2)).await;

        store.set("key1", "value2".to_string(), Duration::from_secs(1)).await;

        assert_eq!(store.get("key1").await, Some("value2".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_store_purge_expired() {
        let store = TtlStore::new();

        store.set("soon", "a".to_string(), Duration::from_secs(1)).await;
        store.set("later", "b".to_string(), Duration::from_secs(10)).await;

        advance(Duration::from_millis(1100)).await;

        let removed = store.purge_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get("later").await, Some("b".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_example_geocode_scenario() {
        let store = TtlStore::new();
        let addr = vec!["Moscow".to_string()];

        store
            .set("geocode:55.7558:37.6173", addr.clone(), Duration::from_secs(5 * 60))
            .await;

        assert_eq!(store.get("geocode:55.7558:37.6173").await, Some(addr));

        advance(Duration::from_secs(5 * 60 + 1)).await;

        assert_eq!(store.get("geocode:55.7558:37.6173").await, None);
    }
}
