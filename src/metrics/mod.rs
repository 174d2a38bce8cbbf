//! Cache Metrics System
//!
//! Provides a flexible metrics system for the cache policies using
//! BTreeMap-based metrics reporting. Each policy tracks its own specific
//! metrics while implementing a common `CacheMetrics` trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: Metrics always appear in consistent order
//! - **Reproducible output**: Essential for testing and benchmark comparisons
//! - **Stable serialization**: Exports have predictable key ordering
//!
//! The performance difference (O(log n) vs O(1)) is negligible with ~10
//! metric keys, but the deterministic behavior is invaluable when comparing
//! runs.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

// Re-export policy-specific metrics
pub mod fifo;
pub mod lfu;
pub mod lru;

pub use fifo::FifoCacheMetrics;
pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;

/// Common metrics tracked by all cache policies.
///
/// A lookup (`get`/`get_mut`) counts as one request and either a hit or a
/// miss; insertions and evictions are counted from `put`. Explicit
/// `remove` calls are tracked separately from capacity evictions.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of lookups made against the cache.
    pub requests: u64,

    /// Number of lookups that found the key present.
    pub cache_hits: u64,

    /// Number of entries written into the cache (new keys and overwrites).
    pub insertions: u64,

    /// Number of entries displaced by capacity pressure.
    pub evictions: u64,

    /// Number of entries removed explicitly by the caller.
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a cache miss.
    ///
    /// Misses can also be derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records an insertion (new key or value overwrite).
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an eviction caused by capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an explicit removal by the caller.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Cache hit rate in `[0.0, 1.0]`, or 0.0 before any request.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Cache miss rate in `[0.0, 1.0]`, or 0.0 before any request.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Evictions per insertion in `[0.0, 1.0]`, or 0.0 before any insertion.
    pub fn eviction_rate(&self) -> f64 {
        if self.insertions > 0 {
            self.evictions as f64 / self.insertions as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to a BTreeMap for reporting.
    ///
    /// Uses BTreeMap to ensure deterministic, consistent ordering of metrics.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);

        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("eviction_rate".to_string(), self.eviction_rate());

        metrics
    }
}

/// Trait that all cache policies implement for metrics reporting.
///
/// Provides a uniform interface for retrieving metrics from any cache
/// implementation, with BTreeMap ensuring deterministic ordering of the
/// reported keys.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Policy name for identification (e.g., "LRU", "LFU", "FIFO").
    fn algorithm_name(&self) -> &'static str;
}
