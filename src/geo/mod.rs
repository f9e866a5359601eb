//! Geo Module
//!
//! Domain types for geocoding lookups, the upstream provider boundary, and
//! the cache-aside proxy that fronts it.

mod provider;
mod proxy;
mod types;

// Re-export public types
pub use provider::GeoProvider;
pub use proxy::GeoProxy;
pub use types::Address;
