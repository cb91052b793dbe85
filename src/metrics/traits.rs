//! # Metrics Traits
//!
//! ```text
//!   ┌──────────────────────────┐
//!   │   CoreMetricsRecorder    │   engine side, &mut self
//!   │  get_hit / get_miss      │
//!   │  put_call / put_rejected │
//!   │  insert_new / update     │
//!   │  evicted_entry / reset   │
//!   └────────────┬─────────────┘
//!                │ counters
//!                ▼
//!   ┌──────────────────────────┐    ┌──────────────────────────┐
//!   │ MetricsSnapshotProvider  │───►│    MetricsExporter<S>    │
//!   │ (tests, benches)         │    │ (monitoring)             │
//!   └──────────────────────────┘    └──────────────────────────┘
//! ```
//!
//! Recorders only write counters; providers only read; exporters only
//! publish. None of them influence cache behavior.

/// Counters shared by every cache operation.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_put_call(&mut self);
    fn record_put_rejected(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_reset(&mut self);
}

/// Produces a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes a snapshot to some sink.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
