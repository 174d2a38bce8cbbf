//! Unified Cache Entry Type
//!
//! This module provides the `CacheEntry<K, V, M>` structure stored in every
//! arena node. The generic `M` parameter lets each eviction policy attach its
//! own per-entry metadata without affecting the core entry structure: LRU and
//! FIFO carry no metadata (`M = ()`), LFU carries its access-frequency
//! counter ([`LfuMeta`](crate::meta::LfuMeta)).
//!
//! The entry is owned exclusively by its arena node. The cache index never
//! stores a copy of the entry, only the node's handle.

use core::fmt;

/// A cached key-value pair plus policy-specific metadata.
///
/// Use `()` for policies that don't need extra per-entry state. The key is
/// duplicated between the entry and the hash index (the index owns its own
/// clone), which is what allows eviction to find and erase the index slot
/// from the victim node alone.
///
/// # Examples
///
/// ```
/// use evcache::entry::CacheEntry;
/// use evcache::meta::LfuMeta;
///
/// // Entry without policy metadata (LRU, FIFO)
/// let entry: CacheEntry<&str, i32> = CacheEntry::new("key", 42);
/// assert_eq!(entry.key, "key");
/// assert_eq!(entry.value, 42);
///
/// // Entry with a frequency counter (LFU)
/// let entry = CacheEntry::with_meta("key", 42, LfuMeta::new(1));
/// assert_eq!(entry.meta.frequency, 1);
/// ```
pub struct CacheEntry<K, V, M = ()> {
    /// The cached key.
    pub key: K,

    /// The cached value.
    pub value: V,

    /// Policy-specific metadata (frequency for LFU, `()` otherwise).
    pub meta: M,
}

impl<K, V, M: Default> CacheEntry<K, V, M> {
    /// Creates an entry with default metadata.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            meta: M::default(),
        }
    }
}

impl<K, V, M> CacheEntry<K, V, M> {
    /// Creates an entry with explicit policy metadata.
    #[inline]
    pub fn with_meta(key: K, value: V, meta: M) -> Self {
        Self { key, value, meta }
    }

    /// Consumes the entry and returns its key-value pair, discarding the
    /// metadata. Used when handing an evicted or removed pair back to the
    /// caller.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone, M: Clone> Clone for CacheEntry<K, V, M> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            meta: self.meta.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, M: fmt::Debug> fmt::Debug for CacheEntry<K, V, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("meta", &self.meta)
            .finish()
    }
}
