//! Least Frequently Used Cache Implementation.
//!
//! The LFU (Least Frequently Used) cache evicts the least frequently
//! accessed items when the cache reaches capacity. Entries are partitioned
//! into frequency buckets, one recency-ordered list per distinct access
//! count, threaded through a single shared node arena, with a running
//! `min_frequency` locating the eviction candidate in O(1).
//!
//! Within a bucket the most recently touched entry sits at the front, so a
//! frequency tie is broken by evicting the least recently used entry among
//! the tied ones (the bucket tail).
//!
//! This policy outperforms LRU for workloads where certain items stay
//! popular over time, as it protects frequently accessed items from
//! eviction by one-time scans.

extern crate alloc;

use crate::arena::{LinkedList, NodeArena, NodeRef};
use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::meta::LfuMeta;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
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

/// Internal LFU segment containing the actual cache algorithm.
///
/// This is shared between `LfuCache` (single-threaded) and
/// `ConcurrentLfuCache` (multi-threaded).
///
/// Invariants:
/// - a key is present in `map` iff its node is live in `arena` and linked
///   into exactly one bucket, the one keyed by its current frequency;
/// - `buckets` holds no empty lists;
/// - when the cache is non-empty, `min_frequency` equals the smallest
///   bucket key.
pub(crate) struct LfuSegment<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,

    /// Current minimum frequency among live entries.
    min_frequency: u64,

    /// Node storage shared by all frequency buckets.
    arena: NodeArena<CacheEntry<K, V, LfuMeta>>,

    /// Frequency -> recency-ordered list of entries with that exact count.
    buckets: BTreeMap<u64, LinkedList>,

    /// Index from key to its node handle.
    map: HashMap<K, NodeRef, S>,

    metrics: LfuCacheMetrics,
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuSegment<K, V, S> {
    pub(crate) fn with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        LfuSegment {
            config,
            min_frequency: 1,
            arena: NodeArena::new(),
            buckets: BTreeMap::new(),
            map: HashMap::with_capacity_and_hasher(config.capacity, hash_builder),
            metrics: LfuCacheMetrics::new(),
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
    pub(crate) fn metrics(&self) -> &LfuCacheMetrics {
        &self.metrics
    }

    /// Relocates a node from its current frequency bucket to the head of
    /// the next one, bumping its counter.
    fn bump(&mut self, node: NodeRef) {
        let old_frequency = match self.arena.get(node) {
            Some(entry) => entry.meta.frequency,
            None => return,
        };
        let new_frequency = old_frequency + 1;

        if let Some(bucket) = self.buckets.get_mut(&old_frequency) {
            bucket.unlink(&mut self.arena, node);
            if bucket.is_empty() {
                self.buckets.remove(&old_frequency);
                // The bumped node now occupies frequency old+1 and nothing
                // can sit between old and old+1, so when the emptied bucket
                // was the minimum the new minimum is exactly old+1.
                if self.min_frequency == old_frequency {
                    self.min_frequency = new_frequency;
                }
            }
        }

        if let Some(entry) = self.arena.get_mut(node) {
            entry.meta.increment();
        }
        self.buckets
            .entry(new_frequency)
            .or_insert_with(LinkedList::new)
            .push_front(&mut self.arena, node);

        self.metrics.record_frequency_increment(new_frequency);
        self.metrics.update_frequency_levels(&self.buckets);
    }

    pub(crate) fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.metrics.core.record_hit();
                self.bump(node);
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
                self.bump(node);
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

        // Overwriting counts as an access: the value is replaced in place
        // and the entry moves up one frequency bucket.
        if let Some(node) = self.map.get(&key).copied() {
            self.bump(node);
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

        let node = self
            .arena
            .insert(CacheEntry::with_meta(key.clone(), value, LfuMeta::new(1)));
        self.buckets
            .entry(1)
            .or_insert_with(LinkedList::new)
            .push_front(&mut self.arena, node);
        self.map.insert(key, node);
        // The new node is the only entry guaranteed to sit in bucket 1, so
        // the minimum is reset unconditionally rather than recomputed.
        self.min_frequency = 1;

        self.metrics.core.record_insertion();
        self.metrics.update_frequency_levels(&self.buckets);

        evicted
    }

    /// Unlinks the tail of the minimum-frequency bucket and erases it from
    /// the index.
    fn evict_one(&mut self) -> Option<(K, V)> {
        let bucket = self.buckets.get_mut(&self.min_frequency)?;
        let victim = bucket.pop_back(&mut self.arena)?;
        if bucket.is_empty() {
            self.buckets.remove(&self.min_frequency);
        }
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
        let frequency = self.arena.get(node)?.meta.frequency;

        if let Some(bucket) = self.buckets.get_mut(&frequency) {
            bucket.unlink(&mut self.arena, node);
            if bucket.is_empty() {
                self.buckets.remove(&frequency);
                if self.min_frequency == frequency {
                    // Unlike bump, an arbitrary removal gives no shortcut:
                    // rescan the remaining buckets for the new minimum.
                    self.min_frequency = self.buckets.keys().next().copied().unwrap_or(1);
                }
            }
        }

        let entry = self.arena.remove(node)?;
        self.metrics.core.record_removal();
        self.metrics.update_frequency_levels(&self.buckets);
        Some(entry.value)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
        self.arena.clear();
        self.buckets.clear();
        self.min_frequency = 1;
        self.metrics.update_frequency_levels(&self.buckets);
    }

    /// Removes and returns the eviction candidate (least frequently used
    /// item, least recently used among ties).
    pub(crate) fn pop(&mut self) -> Option<(K, V)> {
        if self.is_empty() {
            return None;
        }
        let result = self.evict_one();
        if !self.buckets.contains_key(&self.min_frequency) {
            self.min_frequency = self.buckets.keys().next().copied().unwrap_or(1);
        }
        self.metrics.update_frequency_levels(&self.buckets);
        result
    }

    /// Removes and returns the most frequently used item (most recently
    /// used among ties), the reverse of [`pop`](Self::pop).
    pub(crate) fn popr(&mut self) -> Option<(K, V)> {
        let max_frequency = self.buckets.keys().next_back().copied()?;
        let bucket = self.buckets.get_mut(&max_frequency)?;
        let node = bucket.pop_front(&mut self.arena)?;
        if bucket.is_empty() {
            self.buckets.remove(&max_frequency);
            if self.min_frequency == max_frequency {
                self.min_frequency = self.buckets.keys().next().copied().unwrap_or(1);
            }
        }
        let entry = self.arena.remove(node)?;
        self.map.remove(&entry.key);
        self.metrics.core.record_removal();
        self.metrics.update_frequency_levels(&self.buckets);
        Some(entry.into_pair())
    }
}

impl<K, V, S> core::fmt::Debug for LfuSegment<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LfuSegment")
            .field("capacity", &self.config.capacity)
            .field("len", &self.map.len())
            .field("min_frequency", &self.min_frequency)
            .finish()
    }
}

/// An implementation of a Least Frequently Used (LFU) cache.
///
/// The cache tracks the frequency of access for each item and evicts the
/// least frequently used item when the cache reaches capacity. In case of a
/// tie in frequency, the least recently used item among those with the same
/// frequency is evicted.
///
/// # Examples
///
/// ```
/// use evcache::LfuCache;
///
/// let mut cache = LfuCache::new(2);
///
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Access "a" so its frequency rises above "b"'s
/// assert_eq!(cache.get(&"a"), Some(&1));
///
/// // Adding a new item evicts "b", the least frequently used
/// cache.put("c", 3);
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.get(&"a"), Some(&1));
/// assert_eq!(cache.get(&"c"), Some(&3));
/// ```
#[derive(Debug)]
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    segment: LfuSegment<K, V, S>,
}

impl<K: Hash + Eq, V> LfuCache<K, V, DefaultHashBuilder> {
    /// Creates a new LFU cache from a configuration with an optional hasher.
    ///
    /// # Examples
    ///
    /// ```
    /// use evcache::config::LfuCacheConfig;
    /// use evcache::LfuCache;
    ///
    /// let config = LfuCacheConfig { capacity: 100 };
    /// let cache: LfuCache<String, i32> = LfuCache::init(config, None);
    /// ```
    pub fn init(config: LfuCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: LfuSegment::with_hasher(config, hasher.unwrap_or_default()),
        }
    }

    /// Creates a new LFU cache holding at most `capacity` entries.
    ///
    /// A capacity of `0` is legal: the cache then rejects every insertion.
    pub fn new(capacity: usize) -> Self {
        Self::init(LfuCacheConfig { capacity }, None)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Creates a new LFU cache with the specified configuration and hash
    /// builder.
    pub fn with_hasher(config: LfuCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: LfuSegment::with_hasher(config, hash_builder),
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
    /// Accessing an item increases its frequency count and refreshes its
    /// recency within the new frequency bucket.
    #[inline]
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// Accessing an item increases its frequency count.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.get_mut(key)
    }

    /// Returns `true` if the key is present, without touching its frequency.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.segment.contains_key(key)
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Inserts a key-value pair into the cache.
    ///
    /// If the key already exists the value is overwritten in place, the
    /// entry's frequency is bumped (an overwrite is an access), and the old
    /// pair is returned. Otherwise, if the cache is at capacity, the least
    /// frequently used item is evicted first (ties broken by least recent
    /// use) and returned. New items enter with a frequency of 1. At zero
    /// capacity this is a no-op returning `None`.
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

    /// Removes and returns the current eviction candidate.
    ///
    /// For LFU this is the item with the lowest frequency; among items tied
    /// at that frequency, the least recently used one.
    ///
    /// # Examples
    ///
    /// ```
    /// use evcache::LfuCache;
    ///
    /// let mut cache = LfuCache::new(2);
    /// cache.put("a", 1);
    /// cache.put("b", 2);
    /// cache.get(&"b"); // "a" is now the coldest entry
    ///
    /// assert_eq!(cache.pop(), Some(("a", 1)));
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.segment.pop()
    }

    /// Removes and returns the hottest item: highest frequency, most
    /// recently used among ties. The reverse of [`pop`](Self::pop).
    #[inline]
    pub fn popr(&mut self) -> Option<(K, V)> {
        self.segment.popr()
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> Cache<K, V> for LfuCache<K, V, S> {
    fn get(&mut self, key: &K) -> Option<&V> {
        LfuCache::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        LfuCache::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        LfuCache::remove(self, key)
    }

    fn len(&self) -> usize {
        LfuCache::len(self)
    }

    fn cap(&self) -> usize {
        LfuCache::cap(self)
    }

    fn clear(&mut self) {
        LfuCache::clear(self)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.segment.metrics().algorithm_name()
    }
}
