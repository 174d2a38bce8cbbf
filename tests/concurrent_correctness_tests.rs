//! Concurrent Cache Correctness Tests
//!
//! These tests validate that the concurrent cache implementations keep
//! their eviction semantics while being accessed from multiple threads.
//!
//! ## Test Strategy
//!
//! Unlike stress tests that focus on throughput and lack of panics, these
//! tests:
//! - Use small cache sizes for predictable behavior
//! - Verify eviction policies are exactly the single-threaded ones, since
//!   a single per-instance lock imposes one global operation order
//! - Verify cache state invariants under real concurrency (the outcome of
//!   disjoint-key workloads is independent of interleaving)

#![cfg(feature = "concurrent")]

use evcache::metrics::CacheMetrics;
use evcache::{ConcurrentFifoCache, ConcurrentLfuCache, ConcurrentLruCache};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

// ============================================================================
// SECTION 1: POLICY CORRECTNESS THROUGH THE LOCKED WRAPPER
// ============================================================================

#[test]
fn test_concurrent_lru_eviction_matches_single_threaded() {
    let cache: ConcurrentLruCache<i32, i32> = ConcurrentLruCache::new(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    // Refresh 1; 2 becomes the victim.
    assert_eq!(cache.get(&1), Some(10));
    cache.put(4, 40);

    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(10));
    assert_eq!(cache.get(&3), Some(30));
    assert_eq!(cache.get(&4), Some(40));
}

#[test]
fn test_concurrent_lfu_eviction_matches_single_threaded() {
    let cache: ConcurrentLfuCache<i32, i32> = ConcurrentLfuCache::new(2);

    cache.put(1, 10);
    cache.put(2, 20);
    assert_eq!(cache.get(&1), Some(10)); // 1: frequency 2

    cache.put(3, 30); // evicts 2 (frequency 1)

    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&1), Some(10));
    assert_eq!(cache.get(&3), Some(30));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_concurrent_fifo_eviction_matches_single_threaded() {
    let cache: ConcurrentFifoCache<i32, i32> = ConcurrentFifoCache::new(2);

    cache.put(1, 10);
    cache.put(2, 20);
    assert_eq!(cache.get(&1), Some(10)); // no reordering

    cache.put(3, 30); // evicts 1 (oldest insertion)

    assert_eq!(cache.get(&1), None);
    assert_eq!(cache.get(&2), Some(20));
    assert_eq!(cache.get(&3), Some(30));
}

// ============================================================================
// SECTION 2: INVARIANTS UNDER REAL CONCURRENCY
// ============================================================================

#[test]
fn test_concurrent_lru_disjoint_keys_serializable_outcome() {
    // Threads write disjoint key ranges into an under-capacity cache. Every
    // serial interleaving of these operations ends in the same state, so
    // the concurrent run must too: all keys present with their final
    // values.
    let cache: Arc<ConcurrentLruCache<u32, u32>> = Arc::new(ConcurrentLruCache::new(1024));
    let num_threads = 8u32;
    let keys_per_thread = 100u32;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let base = t * keys_per_thread;
                for i in 0..keys_per_thread {
                    cache.put(base + i, base + i);
                    let _ = cache.get(&(base + i));
                    cache.put(base + i, (base + i) * 2);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), (num_threads * keys_per_thread) as usize);
    for k in 0..num_threads * keys_per_thread {
        assert_eq!(cache.get(&k), Some(k * 2));
    }
}

#[test]
fn test_concurrent_lfu_disjoint_put_remove_outcome() {
    // Each thread inserts its own keys and removes the even ones; the final
    // contents are exactly the odd keys regardless of interleaving.
    let cache: Arc<ConcurrentLfuCache<u32, u32>> = Arc::new(ConcurrentLfuCache::new(1024));
    let num_threads = 4u32;
    let keys_per_thread = 100u32;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let base = t * keys_per_thread;
                for i in 0..keys_per_thread {
                    cache.put(base + i, base + i);
                }
                for i in (0..keys_per_thread).step_by(2) {
                    assert_eq!(cache.remove(&(base + i)), Some(base + i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        cache.len(),
        (num_threads * keys_per_thread / 2) as usize,
        "only odd keys should remain"
    );
    for t in 0..num_threads {
        let base = t * keys_per_thread;
        for i in 0..keys_per_thread {
            let expected = (i % 2 == 1).then_some(base + i);
            assert_eq!(cache.get(&(base + i)), expected);
        }
    }
}

#[test]
fn test_concurrent_capacity_invariant_under_contention() {
    let cache: Arc<ConcurrentLruCache<u32, u32>> = Arc::new(ConcurrentLruCache::new(50));
    let num_threads = 8u32;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..1000u32 {
                    // Overlapping key space to force constant eviction.
                    let key = (t * 31 + i) % 200;
                    cache.put(key, i);
                    let _ = cache.get(&key);
                    assert!(cache.len() <= 50);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 50);
    assert!(!cache.is_empty());
}

#[test]
fn test_concurrent_fifo_no_lost_or_duplicated_entries() {
    // With capacity >= total insertions and distinct keys, no entry may be
    // silently lost or duplicated.
    let cache: Arc<ConcurrentFifoCache<u32, u32>> = Arc::new(ConcurrentFifoCache::new(400));
    let num_threads = 4u32;

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..100u32 {
                    cache.put(t * 100 + i, t);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let mut seen = HashSet::new();
    for k in 0..400u32 {
        if cache.get(&k).is_some() {
            assert!(seen.insert(k));
        }
    }
    assert_eq!(seen.len(), 400);
    assert_eq!(cache.len(), 400);
}

#[test]
fn test_concurrent_metrics_aggregate_sanely() {
    let cache: Arc<ConcurrentLruCache<u32, u32>> = Arc::new(ConcurrentLruCache::new(100));
    let num_threads = 4u32;
    let gets_per_thread = 50u32;

    for i in 0..100 {
        cache.put(i, i);
    }

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..gets_per_thread {
                    let _ = cache.get(&i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let metrics = cache.metrics();
    let expected = f64::from(num_threads * gets_per_thread);
    assert_eq!(metrics.get("cache_hits"), Some(&expected));
    assert_eq!(metrics.get("requests"), Some(&expected));
}
