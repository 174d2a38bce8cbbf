//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Sizing Guidelines
//!
//! `capacity` bounds the number of entries, not their byte size. Each entry
//! carries a fixed overhead beyond the key and value (arena linkage plus one
//! index slot, ~48-64 bytes), so for a memory budget divide by the expected
//! entry footprint:
//!
//! ```text
//! capacity ≈ memory_budget / (avg_key + avg_value + overhead_per_entry)
//! ```
//!
//! # Examples
//!
//! ```
//! use evcache::config::LruCacheConfig;
//! use evcache::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when the cache reaches
/// capacity.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. `0` is legal
///   and produces a cache that rejects every insertion.
///
/// # Examples
///
/// ```
/// use evcache::config::LruCacheConfig;
/// use evcache::LruCache;
///
/// let config = LruCacheConfig { capacity: 500 };
/// let cache: LruCache<&str, i32> = LruCache::init(config, None);
/// ```
#[derive(Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
