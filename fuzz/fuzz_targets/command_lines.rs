#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::command::{parse_line, replay, Outcome};
use lrukit::policy::lru::LruCache;
use lrukit::traits::CoreCache;

// Fuzz the command replayer with arbitrary text
//
// Every non-blank line must produce exactly one outcome and the cache must
// stay within capacity no matter what the input looks like.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut cache: LruCache<String> = LruCache::new(3).unwrap();
    let outcomes = replay(&mut cache, text.lines());

    let expected = text.lines().filter(|l| !l.trim().is_empty()).count();
    assert_eq!(outcomes.len(), expected);

    for (line, outcome) in text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .zip(&outcomes)
    {
        let malformed = parse_line(line).is_err();
        assert_eq!(malformed, matches!(outcome, Outcome::Malformed(_)));
        let _ = outcome.to_string();
    }

    assert!(cache.len() <= cache.capacity());
    assert_eq!(cache.check_invariants(), Ok(()));
});
