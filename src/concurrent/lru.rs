//! Concurrent LRU Cache Implementation
//!
//! A thread-safe LRU cache guarded by one per-instance mutex. This is the
//! multi-threaded counterpart to [`LruCache`](crate::LruCache).
//!
//! # How It Works
//!
//! The cache wraps the same [`LruSegment`](crate::lru) algorithm used by
//! the single-threaded cache in a `parking_lot::Mutex`. Every operation
//! locks, runs the O(1) segment operation, and unlocks on return. Because
//! there is a single global order of operations, eviction semantics are
//! exactly those of the single-threaded LRU: the outcome of any concurrent
//! run matches some serial interleaving of the same calls.
//!
//! # When to Use
//!
//! **Use ConcurrentLruCache when:**
//! - Multiple threads share one cache instance
//! - You want strict global LRU ordering under concurrency
//! - Operations are short (they are: O(1) and CPU-bound)
//!
//! **Consider alternatives when:**
//! - Single-threaded access only → use `LruCache` and skip the lock
//!
//! # Example
//!
//! ```rust,ignore
//! use evcache::concurrent::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentLruCache::new(10_000));
//!
//! let handles: Vec<_> = (0..4).map(|i| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for j in 0..1000 {
//!             cache.put(format!("key-{}-{}", i, j), j);
//!         }
//!     })
//! }).collect();
//!
//! for h in handles {
//!     h.join().unwrap();
//! }
//!
//! assert!(cache.len() <= 10_000);
//! ```

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::lru::LruSegment;
use crate::metrics::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache serializing all operations behind one lock.
///
/// Shareable across threads via `Arc`; all methods take `&self`. Lookups
/// return cloned values so no reference into cache internals ever escapes
/// the lock.
///
/// # Example
///
/// ```rust,ignore
/// use evcache::concurrent::ConcurrentLruCache;
/// use std::sync::Arc;
///
/// let cache = Arc::new(ConcurrentLruCache::new(1000));
///
/// cache.put("key".to_string(), 42);
/// assert_eq!(cache.get(&"key".to_string()), Some(42));
/// ```
pub struct ConcurrentLruCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LruSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLruCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LRU cache from a configuration with an
    /// optional hasher.
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }

    /// Creates a new concurrent LRU cache holding at most `capacity`
    /// entries.
    pub fn new(capacity: usize) -> Self {
        Self::init(LruCacheConfig { capacity }, None)
    }
}

impl<K, V, S> ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a concurrent LRU cache with a custom hash builder.
    ///
    /// Use this for deterministic hashing or DoS-resistant hashers.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LruSegment::with_hasher(config, hash_builder)),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    pub fn cap(&self) -> usize {
        self.segment.lock().cap()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.segment.lock().len()
    }

    /// Returns `true` if the cache contains no entries.
    pub fn is_empty(&self) -> bool {
        self.segment.lock().is_empty()
    }

    /// Retrieves a value from the cache, promoting the entry to most
    /// recently used.
    ///
    /// Returns a **clone** of the value so the lock is released before the
    /// caller touches it. For read-only access without cloning, use
    /// [`get_with()`](Self::get_with).
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the
    /// lock.
    ///
    /// More efficient than `get()` when you only need to read from the
    /// value, as it avoids cloning. The lock is released after `f` returns;
    /// do not call back into this cache from `f`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Get length without cloning the whole string
    /// let len = cache.get_with(&key, |value| value.len());
    /// ```
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it under the
    /// lock.
    ///
    /// Allows in-place modification of cached values without removing them.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Increment a counter in-place
    /// cache.get_mut_with(&"counter".to_string(), |value| *value += 1);
    /// ```
    pub fn get_mut_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&mut V) -> R,
    {
        self.segment.lock().get_mut(key).map(f)
    }

    /// Inserts a key-value pair into the cache.
    ///
    /// Same contract as [`LruCache::put`](crate::LruCache::put): returns
    /// the overwritten pair, the evicted pair, or `None`.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.segment.lock().put(key, value)
    }

    /// Removes a key from the cache, returning its value if present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().remove(key)
    }

    /// Checks if the cache contains a key without updating recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().contains_key(key)
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.segment.lock().clear();
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLRU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLruCache")
            .field("segment", &self.segment.lock())
            .finish()
    }
}
