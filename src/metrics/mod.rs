//! Operation counters for the cache engine.
//!
//! Compiled only with the `metrics` feature. Recording, snapshotting and
//! exporting are split the same way as the rest of the crate splits policy
//! from callers:
//!
//! - [`traits::CoreMetricsRecorder`]: written to by the engine on every call.
//! - [`traits::MetricsSnapshotProvider`]: copies counters out for tests and
//!   benches.
//! - [`traits::MetricsExporter`]: publishes a snapshot, e.g. through
//!   [`exporter::PrometheusTextExporter`].

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
