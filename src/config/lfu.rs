//! Configuration for the Least Frequently Used (LFU) cache.
//!
//! # Examples
//!
//! ```
//! use evcache::config::LfuCacheConfig;
//! use evcache::LfuCache;
//!
//! let config = LfuCacheConfig { capacity: 10_000 };
//! let cache: LfuCache<String, Vec<u8>> = LfuCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// LFU evicts the entry with the lowest access frequency when the cache
/// reaches capacity; frequency ties are broken by evicting the least
/// recently used entry among them.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. Also bounds
///   the number of distinct frequency buckets that can exist at once. `0`
///   is legal and produces a cache that rejects every insertion.
#[derive(Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lfu_config_creation() {
        let config = LfuCacheConfig { capacity: 256 };
        assert_eq!(config.capacity, 256);
    }
}
