//! Cache Module
//!
//! Provides a concurrency-safe in-memory store with TTL expiration and
//! typed cache key derivation.

mod entry;
mod key;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use store::TtlStore;
