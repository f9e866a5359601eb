//! Upstream Provider Boundary
//!
//! The geocoding service consumed by the proxy, kept behind a trait so the
//! concrete protocol (HTTP client, credentials, rate limits) stays outside
//! the cache layer.

use std::future::Future;
use std::sync::Arc;

use crate::error::Result;
use crate::geo::Address;

// == Geo Provider ==
/// Upstream geocoding lookup capability.
///
/// The cache layer performs exactly one call per miss: no retries, no
/// backoff, no fallback values. Timeout enforcement is the caller's concern.
pub trait GeoProvider: Send + Sync {
    /// Free-text address search.
    fn address_search(&self, query: &str) -> impl Future<Output = Result<Vec<Address>>> + Send;

    /// Reverse-lookup of the address at the given coordinates.
    fn geocode(&self, lat: &str, lon: &str) -> impl Future<Output = Result<Vec<Address>>> + Send;
}

impl<T: GeoProvider> GeoProvider for Arc<T> {
    fn address_search(&self, query: &str) -> impl Future<Output = Result<Vec<Address>>> + Send {
        (**self).address_search(query)
    }

    fn geocode(&self, lat: &str, lon: &str) -> impl Future<Output = Result<Vec<Address>>> + Send {
        (**self).geocode(lat, lon)
    }
}
