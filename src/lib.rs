//! Geocache - a cache-aside layer for geocoding lookups
//!
//! Provides a concurrency-safe TTL store and a proxy that wraps an upstream
//! geocoding service with cache-first semantics and hit/miss telemetry.

pub mod cache;
pub mod config;
pub mod error;
pub mod geo;
pub mod metrics;
pub mod tasks;

pub use cache::{CacheKey, TtlStore};
pub use config::Config;
pub use error::{GeoError, Result};
pub use geo::{Address, GeoProvider, GeoProxy};
pub use metrics::CacheObserver;
pub use tasks::spawn_sweep_task;
