//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache policy.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// LRU-specific metrics (extends CoreCacheMetrics)
///
/// LRU needs no per-policy counters beyond the core metrics (recency is
/// fully encoded in list order) but the structure is kept for consistency
/// with the other policies.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache policies.
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates a zeroed LRU metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts LRU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
