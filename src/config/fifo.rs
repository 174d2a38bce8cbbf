//! Configuration for the First In First Out (FIFO) cache.
//!
//! # Examples
//!
//! ```
//! use evcache::config::FifoCacheConfig;
//! use evcache::FifoCache;
//!
//! let config = FifoCacheConfig { capacity: 10_000 };
//! let cache: FifoCache<String, Vec<u8>> = FifoCache::init(config, None);
//! ```

use core::fmt;

/// Configuration for a FIFO (First In First Out) cache.
///
/// FIFO evicts the oldest inserted entry when the cache reaches capacity,
/// regardless of how often or how recently entries were accessed.
///
/// # Fields
///
/// - `capacity`: Maximum number of entries the cache can hold. `0` is legal
///   and produces a cache that rejects every insertion.
#[derive(Clone, Copy)]
pub struct FifoCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for FifoCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
