//! LFU Cache Metrics
//!
//! Metrics specific to the LFU (Least Frequently Used) cache policy. LFU
//! tracks access frequency for each entry, so these metrics focus on the
//! frequency distribution.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU-specific metrics (extends CoreCacheMetrics)
#[derive(Debug, Default, Clone)]
pub struct LfuCacheMetrics {
    /// Core metrics common to all cache policies.
    pub core: CoreCacheMetrics,

    /// Current minimum frequency among live entries (0 when empty).
    pub min_frequency: u64,

    /// Current maximum frequency among live entries (0 when empty).
    pub max_frequency: u64,

    /// Total number of frequency increments (every access bumps frequency).
    pub total_frequency_increments: u64,

    /// Number of distinct frequency buckets currently in use.
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Creates a zeroed LFU metrics instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frequency increment (an access raised an entry's count).
    pub fn record_frequency_increment(&mut self, new_frequency: u64) {
        self.total_frequency_increments += 1;
        if new_frequency > self.max_frequency {
            self.max_frequency = new_frequency;
        }
    }

    /// Refreshes the distribution gauges from the live bucket map.
    pub fn update_frequency_levels<T>(&mut self, buckets: &BTreeMap<u64, T>) {
        self.active_frequency_levels = buckets.len() as u64;
        self.min_frequency = buckets.keys().next().copied().unwrap_or(0);
        self.max_frequency = buckets.keys().next_back().copied().unwrap_or(0);
    }

    /// The spread between the hottest and coldest live entries.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Converts LFU metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();

        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );

        if self.core.requests > 0 {
            metrics.insert(
                "frequency_increment_rate".to_string(),
                self.total_frequency_increments as f64 / self.core.requests as f64,
            );
        }

        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
