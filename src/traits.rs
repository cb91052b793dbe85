//! # Cache Operation Contracts
//!
//! Callers outside the engine (the command replayer, test harnesses, the
//! benches) are written against these traits rather than against
//! [`LruCache`](crate::policy::lru::LruCache) itself, so they can only reach
//! the public operations.
//!
//! ```text
//!   ┌─────────────────────────────────────────────┐
//!   │               CoreCache<K>                  │
//!   │                                             │
//!   │  get(&mut, &K) → Option<u64>   (reorders)   │
//!   │  put(&mut, K, V, reset) → Result<(), _>     │
//!   │  reset(&mut)                                │
//!   │  describe(&) → Vec<(K, u64)>   (MRU first)  │
//!   │  contains / len / is_empty / capacity       │
//!   └──────────────────────┬──────────────────────┘
//!                          │
//!                          ▼
//!   ┌─────────────────────────────────────────────┐
//!   │             LruCacheTrait<K>                │
//!   │                                             │
//!   │  peek(&, &K) → Option<u64>     (no reorder) │
//!   │  peek_lru(&) → Option<(&K, u64)>            │
//!   │  recency_rank(&, &K) → Option<usize>        │
//!   └─────────────────────────────────────────────┘
//! ```
//!
//! There is no `remove`: entries leave the cache only through eviction or
//! [`reset`](CoreCache::reset).
//!
//! ## Example
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::CoreCache;
//!
//! fn warm<C: CoreCache<u64>>(cache: &mut C, keys: &[u64]) {
//!     for &k in keys {
//!         cache.put(k, k + 1, false).unwrap();
//!     }
//! }
//!
//! let mut cache = LruCache::new(3).unwrap();
//! warm(&mut cache, &[1, 2, 3, 4]);
//! assert_eq!(cache.describe(), vec![(4, 5), (3, 4), (2, 3)]);
//! ```

use crate::error::ValidationError;
use crate::value::RawValue;

/// Operations every recency cache supports.
pub trait CoreCache<K> {
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// An absent key is a normal outcome (`None`), never an error.
    fn get(&mut self, key: &K) -> Option<u64>;

    /// Inserts or updates `key`, clearing the whole cache first when `reset`
    /// is set.
    ///
    /// The value must be a positive integer. Otherwise nothing is inserted
    /// or updated and the rejection is returned. A requested reset has
    /// already happened by then.
    fn put<V: Into<RawValue>>(
        &mut self,
        key: K,
        value: V,
        reset: bool,
    ) -> Result<(), ValidationError>;

    /// Drops every entry. Capacity is unchanged.
    fn reset(&mut self);

    /// Entries from most to least recently used. Does not touch recency.
    fn describe(&self) -> Vec<(K, u64)>;

    fn contains(&self, key: &K) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn capacity(&self) -> usize;
}

/// Read-only recency introspection.
pub trait LruCacheTrait<K>: CoreCache<K> {
    /// Like [`CoreCache::get`] but leaves the recency order alone.
    fn peek(&self, key: &K) -> Option<u64>;

    /// The entry that the next insertion into a full cache would evict.
    fn peek_lru(&self) -> Option<(&K, u64)>;

    /// Position of `key` in recency order, `0` being most recent. O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}
