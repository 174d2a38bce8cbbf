//! Concurrent LFU Cache Implementation
//!
//! A thread-safe LFU cache guarded by one per-instance mutex, the
//! multi-threaded counterpart to [`LfuCache`](crate::LfuCache). The single
//! lock gives one global order of operations, so frequency accounting and
//! eviction behave exactly like the single-threaded LFU.

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::lfu::LfuSegment;
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

/// A thread-safe LFU cache serializing all operations behind one lock.
///
/// Shareable across threads via `Arc`; all methods take `&self`. Lookups
/// return cloned values so no reference into cache internals ever escapes
/// the lock.
pub struct ConcurrentLfuCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<LfuSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentLfuCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent LFU cache from a configuration with an
    /// optional hasher.
    pub fn init(config: LfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }

    /// Creates a new concurrent LFU cache holding at most `capacity`
    /// entries.
    pub fn new(capacity: usize) -> Self {
        Self::init(LfuCacheConfig { capacity }, None)
    }
}

impl<K, V, S> ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a concurrent LFU cache with a custom hash builder.
    pub fn with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(LfuSegment::with_hasher(config, hash_builder)),
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

    /// Retrieves a value from the cache, bumping the entry's frequency.
    ///
    /// Returns a **clone** of the value so the lock is released before the
    /// caller touches it.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.lock().get(key).cloned()
    }

    /// Retrieves a value and applies a function to it while holding the
    /// lock, avoiding a clone. Do not call back into this cache from `f`.
    pub fn get_with<Q, F, R>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        F: FnOnce(&V) -> R,
    {
        self.segment.lock().get(key).map(f)
    }

    /// Retrieves a mutable reference and applies a function to it under the
    /// lock. Counts as an access and bumps the frequency.
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
    /// Same contract as [`LfuCache::put`](crate::LfuCache::put): overwrites
    /// bump frequency, new keys enter at frequency 1, and at capacity the
    /// least frequently used entry (ties: least recent) is evicted first.
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

    /// Checks if the cache contains a key without touching its frequency.
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

    /// Removes and returns the current eviction candidate (least frequently
    /// used, least recently used among ties).
    pub fn pop(&self) -> Option<(K, V)> {
        self.segment.lock().pop()
    }

    /// Removes and returns the hottest entry, the reverse of
    /// [`pop`](Self::pop).
    pub fn popr(&self) -> Option<(K, V)> {
        self.segment.lock().popr()
    }
}

impl<K, V, S> CacheMetrics for ConcurrentLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentLFU"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentLfuCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentLfuCache")
            .field("segment", &self.segment.lock())
            .finish()
    }
}
