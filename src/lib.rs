//! lrukit: a bounded least-recently-used cache for positive integer values,
//! plus a text command replayer that drives it.
//!
//! The engine lives in [`policy::lru`]; it is an index map over an
//! arena-backed recency list (see [`ds`]). [`command`] parses and replays
//! `get`/`put` lines against anything implementing [`traits::CoreCache`].

pub mod command;
pub mod config;
pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod policy;
pub mod prelude;
pub mod traits;
pub mod value;

pub use crate::config::Capacity;
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;
