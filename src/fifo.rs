//! First In First Out (FIFO) Cache Implementation.
//!
//! The FIFO cache evicts entries strictly in insertion order: the oldest
//! inserted entry goes first, no matter how often or how recently it was
//! accessed. Lookups never reorder anything; only inserting a new key
//! appends to the queue.
//!
//! FIFO trades hit rate for predictability. With no per-access bookkeeping
//! it is the cheapest of the policies, and its eviction sequence is fully
//! determined by the insertion sequence, which makes behavior easy to
//! reason about in tests and simulations.

extern crate alloc;

use crate::arena::{LinkedList, NodeArena, NodeRef};
use crate::config::FifoCacheConfig;
use crate::entry::CacheEntry;
use crate::metrics::{CacheMetrics, FifoCacheMetrics};
use crate::Cache;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Internal FIFO segment containing the actual cache algorithm.
///
/// This is shared between `FifoCache` (single-threaded) and
/// `ConcurrentFifoCache` (multi-threaded).
///
/// Invariant: a key is present in `map` iff its node is live in `arena` and
/// linked into `queue`; queue order is insertion order, oldest at the front.
pub(crate) struct FifoSegment<K, V, S = DefaultHashBuilder> {
    config: FifoCacheConfig,
    arena: NodeArena<CacheEntry<K, V>>,
    queue: LinkedList,
    map: HashMap<K, NodeRef, S>,
    metrics: FifoCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> FifoSegment<K, V, S> {
    pub(crate) fn with_hasher(config: FifoCacheConfig, hash_builder: S) -> Self {
        FifoSegment {
            config,
            arena: NodeArena::new(),
            queue: LinkedList::new(),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: FifoCacheMetrics::new(),
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.config.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub(crate) fn metrics(&self) -> &FifoCacheMetrics {
        &self.metrics
    }

    /// Lookup without reordering: FIFO order is insertion order.
    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.metrics.core.record_hit();
                self.arena.get(node).map(|entry| &entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.metrics.core.record_hit();
                self.arena.get_mut(node).map(|entry| &mut entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    pub(crate) fn put(&mut self, key: K, value: V) -> Option<(K, V)>
    where
        K: Clone,
    {
        if self.config.capacity == 0 {
            return None;
        }

        // Overwriting neither reorders the queue nor refreshes the entry's
        // position: its original insertion slot stands.
        if let Some(node) = self.map.get(&key).copied() {
            self.metrics.core.record_insertion();
            let entry = self.arena.get_mut(node)?;
            let old_key = mem::replace(&mut entry.key, key);
            let old_value = mem::replace(&mut entry.value, value);
            return Some((old_key, old_value));
        }

        let mut evicted = None;
        if self.map.len() >= self.config.capacity {
            evicted = self.evict_one();
        }

        let node = self.arena.insert(CacheEntry::new(key.clone(), value));
        self.queue.push_back(&mut self.arena, node);
        self.map.insert(key, node);
        self.metrics.core.record_insertion();

        evicted
    }

    /// Unlinks the oldest inserted node and erases it from the index.
    fn evict_one(&mut self) -> Option<(K, V)> {
        let victim = self.queue.pop_front(&mut self.arena)?;
        let entry = self.arena.remove(victim)?;
        self.map.remove(&entry.key);
        self.metrics.core.record_eviction();
        Some(entry.into_pair())
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        self.queue.unlink(&mut self.arena, node);
        let entry = self.arena.remove(node)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.arena.clear();
        self.queue = LinkedList::new();
    }
}

impl<K, V, S> core::fmt::Debug for FifoSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FifoSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// An implementation of a First In First Out (FIFO) cache.
///
/// Entries are evicted strictly in insertion order. Accessing an entry does
/// not protect it from eviction; only its insertion time matters.
///
/// # Examples
///
/// ```
/// use evcache::FifoCache;
///
/// let mut cache = FifoCache::new(2);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Reads do not change the eviction order
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // "a" is still the oldest insertion, so it goes first
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"a"), None);
/// assert_eq!(cache.get(&"b"), Some(&2));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
#[derive(Debug)]
pub struct FifoCache<K, V, S = DefaultHashBuilder> {
    segment: FifoSegment<K, V, S>,
}

impl<K: Hash + Eq, V> FifoCache<K, V, DefaultHashBuilder> {
    /// Creates a new FIFO cache from a configuration with an optional
    /// hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use evcache::config::FifoCacheConfig;
    /// use evcache::FifoCache;
    ///
    /// let config = FifoCacheConfig { capacity: 100 };
    /// let cache: FifoCache<String, i32> = FifoCache::init(config, None);
    /// ```
    pub fn init(config: FifoCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: FifoSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }

    /// Creates a new FIFO cache holding at most `capacity` entries.
    ///
    /// A capacity of `0` is legal: the cache then rejects every insertion.
    pub fn new(capacity: usize) -> Self {
        Self::init(FifoCacheConfig { capacity }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> FifoCache<K, V, S> {
    /// Creates a new FIFO cache with the specified configuration and hash
    /// builder.
    pub fn with_hasher(config: FifoCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: FifoSegment::with_hasher(config, hash_builder),
        }
    }

    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> usize {
        self.segment.cap()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.segment.len()
    }

    /// Returns `true` if the cache contains no key-value pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.is_empty()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// Unlike LRU and LFU, a FIFO lookup has no side effect on eviction
    /// order.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if the key is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> FifoCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key already exists only its value is replaced (the entry
    /// keeps its original position in the insertion queue) and the old
    /// pair is returned. Otherwise, if the cache is at capacity, the oldest
    /// inserted entry is evicted first and returned. At zero capacity this
    /// is a no-op returning `None`.
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        self.segment.put(key, value)
    }

    /// Removes a key from the cache, returning its value if it was present.
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.remove(key)
    }

    /// Clears the cache, removing all key-value pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.segment.clear()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Cache<K, V> for FifoCache<K, V, S> {
    fn get(&mut self, key: &K) -> Option<&V> {
        FifoCache::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        FifoCache::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        FifoCache::remove(self, key)
    }

    fn len(&self) -> usize {
        FifoCache::len(self)
    }

    fn cap(&self) -> usize {
        FifoCache::cap(self)
    }

    fn clear(&mut self) {
        FifoCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for FifoCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
