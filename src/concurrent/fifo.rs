//! Concurrent FIFO Cache Implementation
//!
//! A thread-safe FIFO cache guarded by one per-instance mutex, the
//! multi-threaded counterpart to [`FifoCache`](crate::FifoCache). Insertion
//! order is global because every operation passes through the same lock.

extern crate alloc;

use crate::config::FifoCacheConfig;
use crate::fifo::FifoSegment;
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

/// A thread-safe FIFO cache serializing all operations behind one lock.
///
/// Shareable across threads via `Arc`; all methods take `&self`. Lookups
/// return cloned values so no reference into cache internals ever escapes
/// the lock.
pub struct ConcurrentFifoCache<K, V, S = DefaultHashBuilder> {
    segment: Mutex<FifoSegment<K, V, S>>,
}

impl<K: Hash + Eq, V> ConcurrentFifoCache<K, V, DefaultHashBuilder> {
    /// Creates a new concurrent FIFO cache from a configuration with an
    /// optional hasher.
    pub fn init(config: FifoCacheConfig, hasher: Option<DefaultHashBuilder>) -> Self {
        Self {
            segment: Mutex::new(FifoSegment::with_hasher(config, hasher.unwrap_or_default())),
        }
    }

    /// Creates a new concurrent FIFO cache holding at most `capacity`
    /// entries.
    pub fn new(capacity: usize) -> Self {
        Self::init(FifoCacheConfig { capacity }, None)
    }
}

impl<K, V, S> ConcurrentFifoCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    /// Creates a concurrent FIFO cache with a custom hash builder.
    pub fn with_hasher(config: FifoCacheConfig, hash_builder: S) -> Self {
        Self {
            segment: Mutex::new(FifoSegment::with_hasher(config, hash_builder)),
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

    /// Retrieves a value from the cache. FIFO lookups never change the
    /// eviction order.
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
    /// lock.
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
    /// Same contract as [`FifoCache::put`](crate::FifoCache::put):
    /// overwrites keep the queue position, new keys append, and at capacity
    /// the oldest insertion is evicted first.
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

    /// Checks if the cache contains a key.
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

impl<K, V, S> CacheMetrics for ConcurrentFifoCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.segment.lock().metrics().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "ConcurrentFIFO"
    }
}

impl<K, V, S> core::fmt::Debug for ConcurrentFifoCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConcurrentFifoCache")
            .field("segment", &self.segment.lock())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::{String, ToString};
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    #[test]
    fn test_basic_operations() {
        let cache: ConcurrentFifoCache<String, i32> = ConcurrentFifoCache::new(100);

        assert!(cache.is_empty());
        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), Some(1));
        assert_eq!(cache.get(&"missing".to_string()), None);
    }

    #[test]
    fn test_deterministic_eviction() {
        let cache: ConcurrentFifoCache<String, i32> = ConcurrentFifoCache::new(2);

        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        // A read does not save "a": insertion order rules.
        let _ = cache.get(&"a".to_string());
        cache.put("c".to_string(), 3);

        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.get(&"b".to_string()), Some(2));
        assert_eq!(cache.get(&"c".to_string()), Some(3));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let cache: ConcurrentFifoCache<String, i32> = ConcurrentFifoCache::new(2);

        cache.put("a".to_string(), 1);
        cache.put("b".to_string(), 2);
        cache.put("a".to_string(), 10);

        let evicted = cache.put("c".to_string(), 3).unwrap();
        assert_eq!(evicted, ("a".to_string(), 10));
    }

    #[test]
    fn test_zero_capacity() {
        let cache: ConcurrentFifoCache<String, i32> = ConcurrentFifoCache::new(0);
        assert_eq!(cache.put("a".to_string(), 1), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_concurrent_access() {
        let cache: Arc<ConcurrentFifoCache<String, usize>> =
            Arc::new(ConcurrentFifoCache::new(500));
        let num_threads = 8;
        let ops_per_thread = 500;

        let mut handles: Vec<std::thread::JoinHandle<()>> = Vec::new();

        for t in 0..num_threads {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..ops_per_thread {
                    let key = std::format!("key_{}_{}", t, i);
                    cache.put(key.clone(), i);
                    let _ = cache.get(&key);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 500);
    }

    #[test]
    fn test_metrics() {
        let cache: ConcurrentFifoCache<String, i32> = ConcurrentFifoCache::new(10);
        cache.put("a".to_string(), 1);
        let _ = cache.get(&"a".to_string());

        let metrics = cache.metrics();
        assert_eq!(metrics.get("cache_hits"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "ConcurrentFIFO");
    }
}
