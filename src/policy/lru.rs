//! # Least Recently Used (LRU) Cache
//!
//! Fixed-capacity key/value cache holding positive integer values. When a new
//! key arrives and the cache is full, the least recently used entry is
//! evicted first. Both `get` and `put` count as a use.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K>                         │
//!   │                                                            │
//!   │   ┌────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (index)                     │   │
//!   │   │    "a" → SlotId(0)   "b" → SlotId(1)               │   │
//!   │   │    "c" → SlotId(2)                                 │   │
//!   │   └──────────────────────────┬─────────────────────────┘   │
//!   │                              │ SlotId                      │
//!   │   ┌──────────────────────────▼─────────────────────────┐   │
//!   │   │  IntrusiveList<Entry<K>>  (order)                  │   │
//!   │   │                                                    │   │
//!   │   │  head ──► [b:2] ◄──► [a:1] ◄──► [c:3] ◄── tail     │   │
//!   │   │           MRU                   LRU                │   │
//!   │   └────────────────────────────────────────────────────┘   │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index owns lookup, the list owns ordering. Entries live in the list's
//! slot arena and are linked by [`SlotId`] handles, so there are no raw
//! pointers and no entry owns another.
//!
//! ## Operations
//!
//! ```text
//!   put(d, 4) on a full cache (capacity 3)
//!   ═══════════════════════════════════════════════════════════════
//!     head ──► [b] ◄──► [a] ◄──► [c] ◄── tail
//!     1. pop_back()            → [c] leaves list and index
//!     2. push_front([d])       → index[d] = new SlotId
//!     head ──► [d] ◄──► [b] ◄──► [a] ◄── tail
//!
//!   get(a)
//!   ═══════════════════════════════════════════════════════════════
//!     1. index[a]              → SlotId, O(1)
//!     2. move_to_front(SlotId) → O(1) splice
//!     head ──► [a] ◄──► [d] ◄──► [b] ◄── tail
//! ```
//!
//! | Method               | Complexity | Reorders |
//! |----------------------|------------|----------|
//! | `new(capacity)`      | O(1)       | -        |
//! | `get(&k)`            | O(1)       | yes      |
//! | `put(k, v, reset)`   | O(1)*      | yes      |
//! | `reset()`            | O(n)       | -        |
//! | `describe()`         | O(n)       | no       |
//! | `peek(&k)`           | O(1)       | no       |
//! | `peek_lru()`         | O(1)       | no       |
//! | `recency_rank(&k)`   | O(n)       | no       |
//!
//! \* a `put` with `reset = true` is O(n) for the clear.
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded. `get` takes `&mut self` because it moves
//! the entry, so sharing requires one lock around the whole cache.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::CoreCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put(1, 1, false).unwrap();
//! cache.put(2, 2, false).unwrap();
//! cache.put(3, 3, false).unwrap(); // evicts 1
//!
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.describe(), vec![(3, 3), (2, 2)]);
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::config::Capacity;
use crate::ds::{IntrusiveList, SlotId};
use crate::error::{ConfigError, InvariantError, ValidationError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, MetricsSnapshotProvider};
use crate::traits::{CoreCache, LruCacheTrait};
use crate::value::RawValue;

/// One cached pair. Its `prev`/`next` links belong to the list node that
/// wraps it.
#[derive(Debug)]
struct Entry<K> {
    key: K,
    value: u64,
}

/// Fixed-capacity LRU cache over keys `K` and positive integer values.
pub struct LruCache<K> {
    index: FxHashMap<K, SlotId>,
    order: IntrusiveList<Entry<K>>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K> LruCache<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty cache, failing unless `capacity` is a positive
    /// integer.
    ///
    /// Accepts any type with a `Capacity` conversion, so negative and
    /// fractional inputs are rejected here rather than being unrepresentable.
    ///
    /// # Example
    /// ```
    /// use lrukit::policy::lru::LruCache;
    /// use lrukit::traits::CoreCache;
    ///
    /// let cache: LruCache<u32> = LruCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    ///
    /// assert!(LruCache::<u32>::new(0).is_err());
    /// assert!(LruCache::<u32>::new(-5).is_err());
    /// assert!(LruCache::<u32>::new(1.5).is_err());
    /// ```
    pub fn new<C>(capacity: C) -> Result<Self, ConfigError>
    where
        C: TryInto<Capacity, Error = ConfigError>,
    {
        Ok(Self::with_capacity(capacity.try_into()?))
    }

    /// Creates an empty cache from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        LruCache {
            index: FxHashMap::with_capacity_and_hasher(capacity.get(), Default::default()),
            order: IntrusiveList::with_capacity(capacity.get()),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Iterates `(key, value)` from most to least recently used without
    /// touching recency.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.order.iter().map(|entry| (&entry.key, entry.value))
    }

    /// Drops the tail entry from both the list and the index.
    fn evict_lru(&mut self) {
        if let Some(evicted) = self.order.pop_back() {
            self.index.remove(&evicted.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
            debug!(
                len = self.index.len(),
                capacity = self.capacity.get(),
                "evicted least recently used entry"
            );
        }
    }

    /// Checks the index/list bijection and the capacity bound.
    ///
    /// Cheap enough for tests and debugging, O(n) in the number of entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.capacity.get() {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.order.len(),
                self.capacity
            )));
        }

        let mut walked = 0usize;
        for id in self.order.iter_ids() {
            walked += 1;
            if walked > self.order.len() {
                return Err(InvariantError::new("recency list contains a cycle"));
            }
            let entry = self
                .order
                .get(id)
                .ok_or_else(|| InvariantError::new("linked slot has no entry"))?;
            match self.index.get(&entry.key) {
                Some(&indexed) if indexed == id => {},
                Some(_) => {
                    return Err(InvariantError::new(
                        "index points at a different slot than the list",
                    ))
                },
                None => return Err(InvariantError::new("list entry missing from index")),
            }
        }

        if walked != self.index.len() {
            return Err(InvariantError::new(format!(
                "walked {} entries, index holds {}",
                walked,
                self.index.len()
            )));
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.order.debug_validate_invariants();
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }
}

impl<K> CoreCache<K> for LruCache<K>
where
    K: Eq + Hash + Clone,
{
    fn get(&mut self, key: &K) -> Option<u64> {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.order.move_to_front(id);

        #[cfg(debug_assertions)]
        self.debug_validate();
        self.order.get(id).map(|entry| entry.value)
    }

    fn put<V: Into<RawValue>>(
        &mut self,
        key: K,
        value: V,
        reset: bool,
    ) -> Result<(), ValidationError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_put_call();

        if reset {
            self.reset();
        }

        let value = match value.into().validate() {
            Ok(value) => value,
            Err(err) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_put_rejected();
                debug!(error = %err, "rejected put");
                return Err(err);
            },
        };

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            if let Some(entry) = self.order.get_mut(id) {
                entry.value = value;
            }
            self.order.move_to_front(id);

            #[cfg(debug_assertions)]
            self.debug_validate();
            return Ok(());
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.index.len() >= self.capacity.get() {
            self.evict_lru();
        }

        let id = self.order.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate();
        Ok(())
    }

    fn reset(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_reset();

        let cleared = self.index.len();
        self.index.clear();
        self.order.clear();

        #[cfg(debug_assertions)]
        self.debug_validate();
        debug!(cleared, capacity = self.capacity.get(), "cache reset");
    }

    fn describe(&self) -> Vec<(K, u64)> {
        self.iter().map(|(key, value)| (key.clone(), value)).collect()
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity.get()
    }
}

impl<K> LruCacheTrait<K> for LruCache<K>
where
    K: Eq + Hash + Clone,
{
    fn peek(&self, key: &K) -> Option<u64> {
        let &id = self.index.get(key)?;
        self.order.get(id).map(|entry| entry.value)
    }

    fn peek_lru(&self) -> Option<(&K, u64)> {
        self.order.back().map(|entry| (&entry.key, entry.value))
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        let &target = self.index.get(key)?;
        self.order.iter_ids().position(|id| id == target)
    }
}

#[cfg(feature = "metrics")]
impl<K> LruCache<K>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            put_calls: self.metrics.put_calls,
            put_rejected: self.metrics.put_rejected,
            insert_new: self.metrics.insert_new,
            insert_updates: self.metrics.insert_updates,
            evicted_entries: self.metrics.evicted_entries,
            resets: self.metrics.resets,
            cache_len: self.index.len(),
            capacity: self.capacity.get(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K> fmt::Debug for LruCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity.get())
            .finish_non_exhaustive()
    }
}

impl<K> Default for LruCache<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with a capacity of 16.
    fn default() -> Self {
        Self::with_capacity(Capacity::default())
    }
}
