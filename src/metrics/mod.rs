//! Metrics Module
//!
//! Telemetry boundary for the cache layer. The proxy reports every cache
//! operation (name, hit/miss, duration) to a `CacheObserver`; what happens
//! to the reports is the sink's business. The production system fed these
//! into Prometheus histograms; that backend lives outside this crate, so the
//! built-in sinks are a tracing emitter, a per-operation counter, and a
//! no-op.

mod stats;

pub use stats::{CacheStats, StatsObserver};

use std::time::Duration;

use tracing::debug;

// == Cache Observer ==
/// Sink for cache operation telemetry.
///
/// Fire-and-forget: implementations must not block the calling operation and
/// have no way to fail it. The proxy emits exactly one report per cache
/// lookup, plus one per successful populate after a miss.
pub trait CacheObserver: Send + Sync {
    /// Records one cache operation.
    fn record_cache_op(&self, op: &str, hit: bool, duration: Duration);
}

// == Tracing Observer ==
/// Observer that emits each report as a structured tracing event.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

impl CacheObserver for TracingObserver {
    fn record_cache_op(&self, op: &str, hit: bool, duration: Duration) {
        debug!(op, hit, duration_us = duration.as_micros() as u64, "cache op");
    }
}

// == Noop Observer ==
/// Observer that discards all reports.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl CacheObserver for NoopObserver {
    fn record_cache_op(&self, _op: &str, _hit: bool, _duration: Duration) {}
}
