pub use crate::config::{Capacity, DEFAULT_CAPACITY};
pub use crate::ds::{IntrusiveList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError, ValidationError, ValueKind};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait};
pub use crate::value::RawValue;
