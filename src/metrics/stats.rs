//! Cache Statistics Module
//!
//! A counting observer and its per-operation hit/miss statistics.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use serde::Serialize;

use crate::metrics::CacheObserver;

// == Cache Stats ==
/// Hit/miss counters for one operation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of lookups served from the cache
    pub hits: u64,
    /// Number of lookups that fell through to upstream
    pub misses: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if nothing has been recorded.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

// == Stats Observer ==
/// Observer that counts hits and misses per operation name.
///
/// Populate reports arrive under their own `_set` operation name and so
/// never skew the lookup counters, mirroring how the production metrics
/// labeled them. The inner lock is held only to bump a counter.
#[derive(Debug, Default)]
pub struct StatsObserver {
    ops: Mutex<HashMap<String, CacheStats>>,
}

impl StatsObserver {
    /// Creates a new observer with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the counters recorded for `op`, zeroed if never reported.
    pub fn stats(&self, op: &str) -> CacheStats {
        self.ops
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(op)
            .cloned()
            .unwrap_or_default()
    }
}

impl CacheObserver for StatsObserver {
    fn record_cache_op(&self, op: &str, hit: bool, _duration: Duration) {
        let mut ops = self
            .ops
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let stats = ops.entry(op.to_string()).or_default();
        if hit {
            stats.hits += 1;
        } else {
            stats.misses += 1;
        }
    }
}
