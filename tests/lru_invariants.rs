// ==============================================
// LRU INVARIANT PROPERTIES (integration)
// ==============================================
//
// Random operation sequences are run against both the cache and a plain
// vector model kept in recency order. After every step the two must agree.

use lrukit::policy::lru::LruCache;
use lrukit::traits::{CoreCache, LruCacheTrait};
use lrukit::value::RawValue;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Put(u8, RawValue, bool),
    Reset,
}

fn raw_value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        6 => (1i64..1_000).prop_map(RawValue::Int),
        1 => (-1_000i64..=0).prop_map(RawValue::Int),
        1 => (-10.0f64..10.0).prop_map(RawValue::Float),
        1 => "[a-z]{0,4}".prop_map(RawValue::Text),
    ]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u8..16).prop_map(Op::Get),
        6 => (0u8..16, raw_value(), prop::bool::weighted(0.05))
            .prop_map(|(k, v, reset)| Op::Put(k, v, reset)),
        1 => Just(Op::Reset),
    ]
}

/// Entries most recent first.
#[derive(Default)]
struct Model {
    entries: Vec<(u8, u64)>,
    capacity: usize,
}

impl Model {
    fn get(&mut self, key: u8) -> Option<u64> {
        let pos = self.entries.iter().position(|&(k, _)| k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u8, value: &RawValue, reset: bool) -> bool {
        if reset {
            self.entries.clear();
        }
        let Ok(value) = value.validate() else {
            return false;
        };
        if let Some(pos) = self.entries.iter().position(|&(k, _)| k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() >= self.capacity {
            self.entries.pop();
        }
        self.entries.insert(0, (key, value));
        true
    }
}

proptest! {
    /// Property: the cache behaves exactly like the recency-ordered model
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_matches_model(
        capacity in 1usize..8,
        ops in prop::collection::vec(op(), 0..200)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();
        let mut model = Model { capacity, ..Model::default() };

        for op in ops {
            match op {
                Op::Get(k) => {
                    prop_assert_eq!(cache.get(&k), model.get(k));
                },
                Op::Put(k, v, reset) => {
                    let accepted = model.put(k, &v, reset);
                    prop_assert_eq!(cache.put(k, v, reset).is_ok(), accepted);
                },
                Op::Reset => {
                    cache.reset();
                    model.entries.clear();
                },
            }
            prop_assert_eq!(cache.describe(), model.entries.clone());
        }
    }

    /// Property: len never exceeds capacity and index/list stay in sync
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_structure_holds(
        capacity in 1usize..8,
        ops in prop::collection::vec(op(), 0..200)
    ) {
        let mut cache = LruCache::new(capacity).unwrap();

        for op in ops {
            match op {
                Op::Get(k) => { cache.get(&k); },
                Op::Put(k, v, reset) => { let _ = cache.put(k, v, reset); },
                Op::Reset => cache.reset(),
            }
            prop_assert!(cache.len() <= cache.capacity());
            prop_assert_eq!(cache.capacity(), capacity);
            prop_assert_eq!(cache.check_invariants(), Ok(()));
            prop_assert_eq!(cache.describe().len(), cache.len());
        }
    }

    /// Property: a rejected put never changes the contents unless it reset
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_rejected_put_leaves_entries(
        keys in prop::collection::vec(0u8..16, 1..20),
        bad in -100i64..=0,
        target in 0u8..16
    ) {
        let mut cache = LruCache::new(4).unwrap();
        for k in keys {
            cache.put(k, u64::from(k) + 1, false).unwrap();
        }
        let before = cache.describe();

        prop_assert!(cache.put(target, bad, false).is_err());
        prop_assert_eq!(cache.describe(), before);
    }

    /// Property: get moves the key to rank 0, peek does not move it
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_get_promotes_peek_does_not(
        keys in prop::collection::vec(0u8..16, 1..20),
        probe in 0u8..16
    ) {
        let mut cache = LruCache::new(5).unwrap();
        for k in keys {
            cache.put(k, 1u32, false).unwrap();
        }

        let rank = cache.recency_rank(&probe);
        prop_assert_eq!(cache.peek(&probe).is_some(), rank.is_some());
        prop_assert_eq!(cache.recency_rank(&probe), rank);

        if cache.get(&probe).is_some() {
            prop_assert_eq!(cache.recency_rank(&probe), Some(0));
        }
    }
}
