//! FIFO Cache Metrics
//!
//! Metrics specific to the FIFO (First In First Out) cache policy.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// FIFO-specific metrics (extends CoreCacheMetrics)
///
/// FIFO never reorders on access, so hits carry no positional information
/// worth tracking; the core counters are the whole story.
#[derive(Debug, Default, Clone)]
pub struct FifoCacheMetrics {
    /// Core metrics common to all cache policies.
    pub core: CoreCacheMetrics,
}

impl FifoCacheMetrics {
    /// Creates a zeroed FIFO metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts FIFO metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for FifoCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "FIFO"
    }
}
