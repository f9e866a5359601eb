//! Caching Geo Proxy
//!
//! Cache-aside orchestration in front of an upstream geocoding provider:
//! check the store, return hits immediately, and populate the store from
//! upstream on a miss. Upstream failures pass through untouched and are
//! never written to the cache.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheKey, TtlStore};
use crate::error::Result;
use crate::geo::{Address, GeoProvider};
use crate::metrics::{CacheObserver, NoopObserver};

// == Operation Names ==
/// Reported to the observer on every cache lookup; the populate step after
/// a miss is reported under the same name with a `_set` suffix.
const OP_ADDRESS_SEARCH: &str = "address_search";
const OP_GEOCODE: &str = "geocode";

// == Geo Proxy ==
/// Cache-aside proxy over an upstream geocoding provider.
///
/// Holds one fixed TTL applied to every entry it writes, a shared store
/// (injected, possibly shared with other consumers), and an observer that
/// receives one report per cache operation. The proxy keeps no other mutable
/// state; all synchronization lives inside the store.
///
/// Concurrent misses for the same key each call upstream independently and
/// overwrite each other in the store (last-write-wins). There is no
/// single-flight de-duplication, so a newly expired hot key can briefly
/// stampede the upstream.
pub struct GeoProxy<U> {
    /// Upstream lookup capability
    upstream: U,
    /// Shared TTL store for lookup results
    store: Arc<TtlStore<Vec<Address>>>,
    /// TTL applied to every entry written by this proxy
    ttl: Duration,
    /// Telemetry sink for hit/miss timing
    observer: Arc<dyn CacheObserver>,
}

impl<U: GeoProvider> GeoProxy<U> {
    // == Constructors ==
    /// Creates a proxy that discards telemetry.
    pub fn new(upstream: U, store: Arc<TtlStore<Vec<Address>>>, ttl: Duration) -> Self {
        Self::with_observer(upstream, store, ttl, Arc::new(NoopObserver))
    }

    /// Creates a proxy reporting cache operations to `observer`.
    pub fn with_observer(
        upstream: U,
        store: Arc<TtlStore<Vec<Address>>>,
        ttl: Duration,
        observer: Arc<dyn CacheObserver>,
    ) -> Self {
        Self {
            upstream,
            store,
            ttl,
            observer,
        }
    }

    // == Address Search ==
    /// Free-text address search with cache-aside semantics.
    ///
    /// The query is used verbatim in the cache key: no trimming, no case
    /// folding. Two queries differing only in whitespace or case are
    /// distinct entries by design.
    pub async fn address_search(&self, query: &str) -> Result<Vec<Address>> {
        let key = CacheKey::search(query);
        self.lookup(key, OP_ADDRESS_SEARCH, || self.upstream.address_search(query))
            .await
    }

    // == Geocode ==
    /// Coordinate reverse-lookup with cache-aside semantics.
    ///
    /// Components are keyed in call order; callers must pass them
    /// consistently or the same location yields distinct entries.
    pub async fn geocode(&self, lat: &str, lon: &str) -> Result<Vec<Address>> {
        let key = CacheKey::geocode(lat, lon);
        self.lookup(key, OP_GEOCODE, || self.upstream.geocode(lat, lon))
            .await
    }

    // == Cache-Aside Core ==
    /// Shared control flow for both query shapes.
    ///
    /// The upstream future is only constructed and awaited on a miss, and
    /// always outside any store lock, so a slow upstream call never stalls
    /// cache traffic for other keys. On upstream failure nothing is written:
    /// a failed lookup must never poison the cache, and the next call for
    /// the same key retries upstream.
    async fn lookup<F, Fut>(&self, key: CacheKey, op: &str, fetch: F) -> Result<Vec<Address>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Address>>>,
    {
        let key = key.encode();

        let start = Instant::now();
        let cached = self.store.get(&key).await;
        let hit = cached.is_some();
        self.observer.record_cache_op(op, hit, start.elapsed());

        if let Some(addresses) = cached {
            debug!(%key, "cache hit");
            return Ok(addresses);
        }
        debug!(%key, "cache miss");

        let addresses = fetch().await?;

        let start = Instant::now();
        self.store.set(key, addresses.clone(), self.ttl).await;
        self.observer
            .record_cache_op(&format!("{op}_set"), true, start.elapsed());

        Ok(addresses)
    }
}
