#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! This section provides quick code examples and API references for each
//! eviction policy.
//!
//! ## Quick Reference
//!
//! | Policy | Description | Best Use Case |
//! |--------|-------------|---------------|
//! | [`LruCache`] | Least Recently Used | General purpose, recency-based access |
//! | [`LfuCache`] | Least Frequently Used | Stable popularity patterns |
//! | [`FifoCache`] | First In First Out | Predictable turnover, cheapest bookkeeping |
//!
//! ## Performance Characteristics
//!
//! | Policy | Get | Put | Remove | Reorders on Get | Per-entry metadata |
//! |--------|-----|-----|--------|-----------------|--------------------|
//! | LRU    | O(1)| O(1)| O(1)   | Yes (recency)   | None               |
//! | LFU    | O(1)| O(1)| O(1)   | Yes (frequency) | 8-byte counter     |
//! | FIFO   | O(1)| O(1)| O(1)   | No              | None               |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! Evicts the item that hasn't been accessed for the longest time. Simple
//! and effective for workloads with temporal locality.
//!
//! ```rust
//! use evcache::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! Tracks access frequency and evicts the least frequently accessed item,
//! breaking ties by recency. Great for workloads with stable popularity
//! patterns.
//!
//! ```rust
//! use evcache::LfuCache;
//!
//! let mut cache = LfuCache::new(2);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! // Access "popular" multiple times
//! for _ in 0..10 { cache.get(&"popular"); }
//!
//! cache.put("new", 3);  // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! ```
//!
//! ### FIFO (First In First Out)
//!
//! Evicts in strict insertion order. Lookups never reorder, so the eviction
//! sequence is fully determined by the insertion sequence.
//!
//! ```rust
//! use evcache::FifoCache;
//!
//! let mut cache = FifoCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // no effect on eviction order
//! cache.put("c", 3);    // "a" evicted (oldest insertion)
//! assert!(cache.get(&"a").is_none());
//! ```
//!
//! ## The `Cache` trait
//!
//! All three policies implement the [`Cache`] capability trait, so the
//! policy can be chosen at construction time and used through one contract:
//!
//! ```rust
//! use evcache::{Cache, FifoCache, LfuCache, LruCache};
//!
//! fn fill(cache: &mut dyn Cache<u32, u32>) {
//!     for i in 0..100 {
//!         cache.put(i, i * 10);
//!     }
//!     assert_eq!(cache.len(), cache.cap().min(100));
//! }
//!
//! fill(&mut LruCache::new(10));
//! fill(&mut LfuCache::new(10));
//! fill(&mut FifoCache::new(10));
//! ```
//!
//! ## Concurrent Caches
//!
//! Enable the `concurrent` feature for thread-safe versions:
//!
//! ```toml
//! [dependencies]
//! evcache = { version = "0.2", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use evcache::ConcurrentLruCache;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000));
//!
//! // Safe to share across threads
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! });
//! ```
//!
//! Each concurrent cache serializes all operations behind a **single
//! per-instance mutex** (monitor pattern). There is no separate read path:
//! every `get` mutates ordering state, so readers and writers are mutually
//! exclusive by design. See the [`concurrent`] module docs for the full
//! rationale.
//!
//! ## Zero capacity
//!
//! A capacity of `0` is legal for every policy. Such a cache permanently
//! rejects insertion: `put` is a no-op and `len()` stays `0`.
//!
//! ```rust
//! use evcache::LruCache;
//!
//! let mut cache = LruCache::new(0);
//! cache.put("a", 1);
//! assert_eq!(cache.len(), 0);
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lfu`]: Least Frequently Used cache implementation
//! - [`fifo`]: First In First Out cache implementation
//! - [`config`]: Configuration structures for all cache policies
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`entry`]: The unified cache entry type
//! - [`meta`]: Policy-specific per-entry metadata
//! - [`concurrent`]: Thread-safe cache implementations (requires the
//!   `concurrent` feature)

#![no_std]

#[cfg(test)]
extern crate scoped_threadpool;

/// Unified cache entry type.
///
/// Provides the generic `CacheEntry<K, V, M>` structure that holds key,
/// value, and policy-specific metadata. One entry lives in each arena node.
pub mod entry;

/// Policy-specific metadata types.
///
/// Provides `LfuMeta`, the access-frequency counter attached to LFU
/// entries. LRU and FIFO need no per-entry metadata.
pub mod meta;

/// Index-addressed node arena and linked-list plumbing.
///
/// Internal infrastructure shared by all policies: nodes are addressed by
/// stable indices, removal recycles slots through a free list, and
/// reordering rewrites index fields in O(1). Not part of the public API.
pub(crate) mod arena;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache policy implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items
/// when the capacity is reached.
pub mod lru;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used items
/// when capacity is reached. Items are tracked by their access frequency.
pub mod lfu;

/// First In First Out (FIFO) cache implementation.
///
/// Provides a fixed-size cache that evicts items strictly in insertion
/// order, ignoring access patterns.
pub mod fifo;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all
/// cache policies. Each policy can track policy-specific metrics while
/// implementing a common interface.
pub mod metrics;

/// Concurrent cache implementations.
///
/// Provides thread-safe cache implementations that serialize all operations
/// behind a single per-instance lock.
///
/// Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

/// The capability contract shared by every eviction policy.
///
/// Captures the uniform Get/Put/Remove/Size surface so callers can pick a
/// policy at construction time and use it through one interface; there is
/// no runtime branching on "which policy" anywhere in shared logic.
///
/// `get` takes `&mut self` because lookups are not read-only for stateful
/// policies: LRU refreshes recency and LFU bumps frequency as a side
/// effect. Absence is a normal result (`None`), not an error.
///
/// The concrete cache types additionally offer borrowed-key lookups
/// (`Q: Borrow<K>`), `get_mut`, `contains_key`, and policy extras like
/// [`LfuCache::pop`](lfu::LfuCache::pop); the trait deliberately sticks to
/// the least common denominator.
pub trait Cache<K, V> {
    /// Returns a reference to the value for `key`, applying the policy's
    /// access promotion (recency or frequency) on a hit.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Inserts or overwrites a key-value pair, evicting one victim first
    /// when a new key arrives at full capacity. Returns the displaced pair
    /// (old value on overwrite, victim on eviction).
    fn put(&mut self, key: K, value: V) -> Option<(K, V)>;

    /// Removes a key, returning its value if present; no-op otherwise.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Fixed capacity set at construction.
    fn cap(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all entries.
    fn clear(&mut self);
}

// Re-export cache types
pub use fifo::FifoCache;
pub use lfu::LfuCache;
pub use lru::LruCache;

// Re-export entry and metadata types
pub use entry::CacheEntry;
pub use meta::LfuMeta;

#[cfg(feature = "concurrent")]
pub use concurrent::{ConcurrentFifoCache, ConcurrentLfuCache, ConcurrentLruCache};
