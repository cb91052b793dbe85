use lrukit::command::render_snapshot;
use lrukit::policy::lru::LruCache;
use lrukit::traits::{CoreCache, LruCacheTrait};

fn main() {
    let mut cache: LruCache<&str> = LruCache::new(2).unwrap();

    cache.put("alpha", 1, false).unwrap();
    cache.put("beta", 2, false).unwrap();

    if let Some(value) = cache.get(&"alpha") {
        println!("hit alpha: {value}");
    }

    cache.put("gamma", 3, false).unwrap();
    println!("contains beta? {}", cache.contains(&"beta"));

    if let Err(err) = cache.put("delta", -4, false) {
        println!("rejected: {err}");
    }

    println!("cache: {}", render_snapshot(&cache.describe()));
    println!("next eviction: {:?}", cache.peek_lru());

    cache.put("omega", 9, true).unwrap();
    println!("after reset: {}", render_snapshot(&cache.describe()));
}

// Expected output:
// hit alpha: 1
// contains beta? false
// rejected: value "-4" not accepted: negative, expected a positive integer
// cache: [gamma:3, alpha:1]
// next eviction: Some(("alpha", 1))
// after reset: [omega:9]
//
// Explanation: capacity=2; after get(&"alpha"), alpha is MRU and beta is LRU.
// Inserting gamma evicts beta. The rejected put leaves the cache alone, and
// a put with reset=true clears everything before inserting omega.
