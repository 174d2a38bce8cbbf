//! Cache Configuration Module
//!
//! This module provides configuration structures for all cache policy
//! implementations. Each cache type has its own dedicated configuration
//! struct with public fields.
//!
//! # Design Philosophy
//!
//! Configuration structs have all public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: All parameters must be provided at construction
//! - **No boilerplate**: No constructors or builder methods needed
//!
//! Capacity is fixed at construction and never changes. A capacity of `0`
//! is legal: such a cache permanently rejects insertion (`put` is a no-op
//! and `len()` stays 0).
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | `LfuCacheConfig` | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | `FifoCacheConfig` | [`FifoCache`](crate::FifoCache) | First In First Out |
//!
//! The concurrent cache variants take the same configuration as their
//! single-threaded counterparts; there is nothing extra to configure for
//! the per-instance lock.
//!
//! # Examples
//!
//! ```
//! use evcache::config::LruCacheConfig;
//! use evcache::LruCache;
//!
//! let config = LruCacheConfig { capacity: 1000 };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```

pub mod fifo;
pub mod lfu;
pub mod lru;

// Re-exports for convenience
pub use fifo::FifoCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;
