use crate::metrics::traits::CoreMetricsRecorder;

/// Raw counters kept inside an [`LruCache`](crate::policy::lru::LruCache).
#[derive(Debug, Default, Clone)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub put_calls: u64,
    pub put_rejected: u64,
    pub insert_new: u64,
    pub insert_updates: u64,
    pub evicted_entries: u64,
    pub resets: u64,
}

impl CoreMetricsRecorder for LruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_put_call(&mut self) {
        self.put_calls += 1;
    }

    fn record_put_rejected(&mut self) {
        self.put_rejected += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_reset(&mut self) {
        self.resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_counters_split_hits_and_misses() {
        let mut m = LruMetrics::default();
        m.record_get_hit();
        m.record_get_hit();
        m.record_get_miss();

        assert_eq!(m.get_calls, 3);
        assert_eq!(m.get_hits, 2);
        assert_eq!(m.get_misses, 1);
    }

    #[test]
    fn put_counters_are_independent() {
        let mut m = LruMetrics::default();
        m.record_put_call();
        m.record_insert_new();
        m.record_put_call();
        m.record_put_rejected();
        m.record_evicted_entry();
        m.record_reset();

        assert_eq!(m.put_calls, 2);
        assert_eq!(m.insert_new, 1);
        assert_eq!(m.insert_updates, 0);
        assert_eq!(m.put_rejected, 1);
        assert_eq!(m.evicted_entries, 1);
        assert_eq!(m.resets, 1);
    }
}
