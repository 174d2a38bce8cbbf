//! Concurrent Cache Implementations
//!
//! This module provides thread-safe cache implementations that wrap each
//! policy's segment in a single per-instance lock (the monitor pattern).
//!
//! # Architecture
//!
//! Every concurrent cache holds exactly one `parking_lot::Mutex` around the
//! whole cache state. Each operation (`get`, `put`, `remove`, `len`)
//! acquires the lock for the duration of one logical operation and releases
//! it on every exit path before returning to the caller.
//!
//! ## Why Mutex Instead of RwLock?
//!
//! Cache policies require **mutable access even for read operations**.
//! Every `get()` call must update internal state:
//!
//! - **LRU**: Moves the accessed item to the front of the recency list
//! - **LFU**: Increments the frequency counter and moves the item between
//!   frequency buckets
//! - **FIFO**: No reordering, but hit/miss accounting still mutates
//!
//! Since `get()` is inherently a write operation, `RwLock` would provide no
//! benefit: every access would still need the exclusive path. `Mutex` is
//! preferred because:
//!
//! 1. **Lower overhead**: `Mutex` has less bookkeeping than `RwLock`
//! 2. **No false promises**: Makes it clear that all operations are
//!    mutually exclusive
//! 3. **Exact policy semantics**: With one lock there is one global order
//!    of operations, so eviction behaves identically to the
//!    single-threaded cache; the outcome of any concurrent run matches
//!    some serial interleaving of the same operations
//!
//! The cost model holds up because every operation is O(1) and CPU-bound:
//! the only effect of contention is delay, never incorrectness.
//!
//! # Available Concurrent Caches
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ConcurrentLruCache`] | Thread-safe LRU cache |
//! | [`ConcurrentLfuCache`] | Thread-safe LFU cache |
//! | [`ConcurrentFifoCache`] | Thread-safe FIFO cache |
//!
//! # Example
//!
//! ```rust,ignore
//! use evcache::concurrent::ConcurrentLruCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Create a concurrent cache (can be shared across threads)
//! let cache = Arc::new(ConcurrentLruCache::new(1000));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```
//!
//! # Thread Safety
//!
//! All concurrent cache types are `Send` and `Sync` (for `Send` key and
//! value types) and are usually shared via `Arc`.
//!
//! Values handed back to callers are clones or closure results computed
//! under the lock, never live references into cache internals.
//!
//! # Zero-Copy Access
//!
//! For performance-critical code paths, use the `get_with()` method which
//! provides access to the value while holding the lock, avoiding an
//! unnecessary clone:
//!
//! ```rust,ignore
//! let len = cache.get_with(&key, |value| value.len());
//! ```
//!
//! Do **not** call back into the same cache from inside a `get_with` /
//! `get_mut_with` closure: the lock is held for the closure's duration and
//! a reentrant call deadlocks.

mod fifo;
mod lfu;
mod lru;

pub use self::fifo::ConcurrentFifoCache;
pub use self::lfu::ConcurrentLfuCache;
pub use self::lru::ConcurrentLruCache;
