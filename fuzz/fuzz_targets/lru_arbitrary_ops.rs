#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::LruCache;
use lrukit::traits::{CoreCache, LruCacheTrait};

// Fuzz arbitrary operation sequences on LruCache
//
// First byte picks the capacity, then each byte pair is (op, argument).
// Values are signed so rejections are exercised alongside inserts.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 16) + 1;
    let mut cache: LruCache<u8> = LruCache::new(capacity).unwrap();

    for pair in ops.chunks_exact(2) {
        let (op, arg) = (pair[0], pair[1]);
        let key = arg % 32;

        match op % 6 {
            0 => {
                // get
                let peeked = cache.peek(&key);
                assert_eq!(cache.get(&key), peeked);
                if peeked.is_some() {
                    assert_eq!(cache.recency_rank(&key), Some(0));
                }
            }
            1 | 2 => {
                // put, value may be zero or negative
                let value = i64::from(arg as i8);
                let before = cache.describe();
                match cache.put(key, value, false) {
                    Ok(()) => {
                        assert!(value > 0);
                        assert_eq!(cache.peek(&key), Some(value as u64));
                        assert_eq!(cache.recency_rank(&key), Some(0));
                    }
                    Err(_) => {
                        assert!(value <= 0);
                        assert_eq!(cache.describe(), before);
                    }
                }
            }
            3 => {
                // put with reset
                let _ = cache.put(key, u64::from(arg) + 1, op & 0x80 != 0);
            }
            4 => {
                // float values are always rejected
                assert!(cache.put(key, f64::from(arg) + 0.5, false).is_err());
            }
            5 => {
                cache.reset();
                assert!(cache.is_empty());
            }
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        assert_eq!(cache.check_invariants(), Ok(()));
    }
});
