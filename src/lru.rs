//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a memory-efficient LRU cache implementation with O(1)
//! operations for all common cache operations. LRU is one of the most widely
//! used cache eviction policies due to its simplicity and good performance
//! for workloads with temporal locality.
//!
//! # Algorithm
//!
//! The LRU cache maintains items in order of recency of use, evicting the
//! least recently used item when capacity is reached. This works on the
//! principle of temporal locality: items that have been accessed recently are
//! likely to be accessed again soon.
//!
//! The recency order lives in an arena-backed linked list; the hash index
//! maps each key to its node handle, so lookups, promotions, and evictions
//! all relink indices without moving entries.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!
//! # When to Use
//!
//! LRU caches are ideal for:
//! - General-purpose caching where access patterns exhibit temporal locality
//! - Simple implementation with predictable performance
//! - Caching with a fixed entry budget
//!
//! They are less suitable for:
//! - Workloads where frequency of access is more important than recency
//! - Scanning patterns where a large set of items is accessed once in sequence
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, use
//! [`ConcurrentLruCache`](crate::concurrent::ConcurrentLruCache) (requires
//! the `concurrent` feature) or wrap the cache in a `Mutex` yourself.

extern crate alloc;

use crate::arena::{LinkedList, NodeArena, NodeRef};
use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::metrics::{CacheMetrics, LruCacheMetrics};
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

/// Internal LRU segment containing the actual cache algorithm.
///
/// This is shared between `LruCache` (single-threaded) and
/// `ConcurrentLruCache` (multi-threaded). All algorithm logic is implemented
/// here to avoid code duplication.
///
/// Invariant: a key is present in `map` if and only if its node is live in
/// `arena` and linked into `list`; `map.len()` is the cache size.
pub(crate) struct LruSegment<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    arena: NodeArena<CacheEntry<K, V>>,
    list: LinkedList,
    map: HashMap<K, NodeRef, S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LruSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        LruSegment {
            config,
            arena: NodeArena::new(),
            list: LinkedList::new(),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: LruCacheMetrics::new(),
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
    pub(crate) fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.list.move_to_front(&mut self.arena, node);
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
                self.list.move_to_front(&mut self.arena, node);
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

        if let Some(node) = self.map.get(&key).copied() {
            self.list.move_to_front(&mut self.arena, node);
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
        self.list.push_front(&mut self.arena, node);
        self.map.insert(key, node);
        self.metrics.core.record_insertion();

        evicted
    }

    /// Unlinks the least recently used node and erases it from the index.
    fn evict_one(&mut self) -> Option<(K, V)> {
        let victim = self.list.pop_back(&mut self.arena)?;
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
        self.list.unlink(&mut self.arena, node);
        let entry = self.arena.remove(node)?;
        self.metrics.core.record_removal();
        Some(entry.value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.arena.clear();
        self.list = LinkedList::new();
    }
}

impl<K, V, S> core::fmt::Debug for LruSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches
/// capacity, the least recently used entry is evicted to make room for new
/// entries.
///
/// # Examples
///
/// ```
/// use evcache::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    segment: LruSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LruCache<K, V, DefaultHashBuilder> {
    /// Creates a new LRU cache from a configuration with an optional hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use evcache::config::LruCacheConfig;
    /// use evcache::LruCache;
    ///
    /// let config = LruCacheConfig { capacity: 100 };
    /// let cache: LruCache<String, i32> = LruCache::init(config, None);
    /// ```
    pub fn init(config: LruCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: LruSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }

    /// Creates a new LRU cache holding at most `capacity` entries.
    ///
    /// A capacity of `0` is legal: the cache then rejects every insertion.
    pub fn new(capacity: usize) -> Self {
        Self::init(LruCacheConfig { capacity }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified configuration and hash
    /// builder.
    pub fn with_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: LruSegment::with_hasher(config, hash_builder),
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

    /// Returns a reference to the value corresponding to the key, promoting
    /// the entry to most recently used.
    ///
    /// The key may be any borrowed form of the cache's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for the
    /// key type.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key,
    /// promoting the entry to most recently used.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if the key is present, without updating recency.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key already exists its value is overwritten in place, the
    /// entry is promoted to most recently used, and the old pair is
    /// returned. If the cache is full the least recently used entry is
    /// evicted first and returned. At zero capacity this is a no-op
    /// returning `None`.
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

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Cache<K, V> for LruCache<K, V, S> {
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        LruCache::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LruCache::len(self)
    }

    fn cap(&self) -> usize {
        LruCache::cap(self)
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_lru_get_put() {
        let mut cache = LruCache::new(2);
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.get(&"apple"), Some(&1));
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), None);
        assert_eq!(cache.put("apple", 3).unwrap().1, 1);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.put("cherry", 4).unwrap().1, 2);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_access_protects_from_eviction() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(cache.get(&"a"), Some(&1));
        let evicted = cache.put("c", 3).unwrap();
        assert_eq!(evicted, ("b", 2));
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_lru_get_mut() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        if let Some(v) = cache.get_mut(&"apple") {
            *v = 3;
        }
        assert_eq!(cache.get(&"apple"), Some(&3));
        cache.put("cherry", 4);
        assert_eq!(cache.get(&"banana"), None);
        assert_eq!(cache.get(&"apple"), Some(&3));
        assert_eq!(cache.get(&"cherry"), Some(&4));
    }

    #[test]
    fn test_lru_remove() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.remove(&"apple"), Some(1));
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.len(), 1);
        // Removing an absent key is a no-op.
        assert_eq!(cache.remove(&"cherry"), None);
        assert_eq!(cache.len(), 1);
        let evicted = cache.put("cherry", 3);
        assert_eq!(evicted, None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_contains_key_no_promotion() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        // contains_key must not refresh recency: "a" stays the victim.
        assert!(cache.contains_key(&"a"));
        cache.put("c", 3);
        assert!(!cache.contains_key(&"a"));
        assert!(cache.contains_key(&"b"));
        assert!(cache.contains_key(&"c"));
    }

    #[test]
    fn test_lru_clear() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        cache.put("cherry", 3);
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_capacity_limits() {
        let mut cache = LruCache::new(2);
        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.put("cherry", 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.get(&"banana"), Some(&2));
        assert_eq!(cache.get(&"cherry"), Some(&3));
    }

    #[test]
    fn test_lru_zero_capacity() {
        let mut cache = LruCache::new(0);
        assert_eq!(cache.put("apple", 1), None);
        assert_eq!(cache.put("banana", 2), None);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"apple"), None);
        assert_eq!(cache.remove(&"apple"), None);
    }

    #[test]
    fn test_lru_overwrite_keeps_size() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("a", 2);
        cache.put("a", 3);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), Some(&3));
    }

    #[test]
    fn test_lru_string_keys() {
        let mut cache = LruCache::new(2);
        let key1 = String::from("apple");
        let key2 = String::from("banana");
        cache.put(key1.clone(), 1);
        cache.put(key2.clone(), 2);
        assert_eq!(cache.get(&key1), Some(&1));
        assert_eq!(cache.get(&key2), Some(&2));
        // Borrowed-form lookups
        assert_eq!(cache.get("apple"), Some(&1));
        assert_eq!(cache.get("banana"), Some(&2));
    }

    #[derive(Debug, Clone, Eq, PartialEq)]
    struct ComplexValue {
        val: i32,
        description: String,
    }

    #[test]
    fn test_lru_complex_values() {
        let mut cache = LruCache::new(2);
        let fruit1 = ComplexValue {
            val: 1,
            description: String::from("First fruit"),
        };
        let fruit2 = ComplexValue {
            val: 2,
            description: String::from("Second fruit"),
        };
        let fruit3 = ComplexValue {
            val: 3,
            description: String::from("Third fruit"),
        };
        cache.put(String::from("apple"), fruit1.clone());
        cache.put(String::from("banana"), fruit2.clone());
        assert_eq!(cache.get("apple").unwrap().val, fruit1.val);
        assert_eq!(cache.get("banana").unwrap().val, fruit2.val);
        let evicted = cache.put(String::from("cherry"), fruit3).unwrap();
        assert_eq!(evicted.1, fruit1);
        assert_eq!(cache.remove("apple"), None);
    }

    #[test]
    fn test_lru_metrics() {
        use crate::metrics::CacheMetrics;
        let mut cache = LruCache::new(2);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("requests").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_hits").unwrap(), &0.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &0.0);

        cache.put("apple", 1);
        cache.put("banana", 2);
        cache.get(&"apple");
        cache.get(&"banana");
        cache.get(&"missing");

        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits").unwrap(), &2.0);
        assert_eq!(metrics.get("cache_misses").unwrap(), &1.0);
        assert_eq!(metrics.get("requests").unwrap(), &3.0);

        cache.put("cherry", 3);
        let metrics = cache.metrics();
        assert_eq!(metrics.get("evictions").unwrap(), &1.0);
        assert_eq!(metrics.get("insertions").unwrap(), &3.0);
        assert_eq!(cache.algorithm_name(), "LRU");
    }

    #[test]
    fn test_lru_cache_trait_object() {
        let mut cache = LruCache::new(2);
        let cache: &mut dyn Cache<&str, i32> = &mut cache;
        cache.put("a", 1);
        cache.put("b", 2);
        cache.get(&"a");
        cache.put("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.cap(), 2);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_lru_segment_directly() {
        let mut segment: LruSegment<&str, i32, DefaultHashBuilder> =
            LruSegment::with_hasher(LruCacheConfig { capacity: 2 }, DefaultHashBuilder::default());
        assert_eq!(segment.len(), 0);
        assert!(segment.is_empty());
        assert_eq!(segment.cap(), 2);
        segment.put("a", 1);
        segment.put("b", 2);
        assert_eq!(segment.len(), 2);
        assert_eq!(segment.get(&"a"), Some(&1));
        assert_eq!(segment.get(&"b"), Some(&2));
    }

    #[test]
    fn test_lru_shared_behind_mutex() {
        extern crate std;
        use std::sync::{Arc, Mutex};
        use std::thread;
        use std::vec::Vec;

        let cache = Arc::new(Mutex::new(LruCache::new(100)));
        let num_threads = 4;
        let ops_per_thread = 100;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("thread_{}_key_{}", t, i);
                    let mut guard = cache.lock().unwrap();
                    guard.put(key.clone(), t * 1000 + i);
                    let _ = guard.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let guard = cache.lock().unwrap();
        assert!(guard.len() <= 100);
        assert!(!guard.is_empty());
    }
}
