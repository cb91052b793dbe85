//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a cache cannot be constructed because its
//!   capacity is not a positive integer.
//! - [`ValidationError`]: Returned by `put` when the value is not a positive
//!   integer. Nothing is inserted or updated.
//! - [`InvariantError`]: Returned by
//!   [`LruCache::check_invariants`](crate::policy::lru::LruCache::check_invariants)
//!   when index and recency list disagree.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::{ConfigError, ValueKind};
//! use lrukit::policy::lru::LruCache;
//! use lrukit::traits::CoreCache;
//!
//! let bad: Result<LruCache<u32>, ConfigError> = LruCache::new(0);
//! assert!(bad.is_err());
//!
//! let mut cache: LruCache<&str> = LruCache::new(2).unwrap();
//! let err = cache.put("x", -3, false).unwrap_err();
//! assert_eq!(err.kind(), ValueKind::Negative);
//! assert!(cache.is_empty());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration is invalid.
///
/// Produced by [`Capacity`](crate::config::Capacity) conversions and
/// therefore by [`LruCache::new`](crate::policy::lru::LruCache::new). No
/// cache exists when this is returned.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCache;
///
/// let err = LruCache::<u64>::new(-5).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// Why a value was refused by `put`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// An integer below zero.
    Negative,
    /// The integer zero.
    Zero,
    /// A floating point number, including whole-valued ones like `2.0`.
    NonInteger,
    /// Not a number at all.
    WrongType,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Negative => "negative",
            ValueKind::Zero => "zero",
            ValueKind::NonInteger => "non-integer",
            ValueKind::WrongType => "wrong type",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a value is not a positive integer.
///
/// Recoverable: the cache is unchanged and the caller decides how to report
/// it. The rejected value is kept in its textual form so it can be shown
/// regardless of the input type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    value: String,
    kind: ValueKind,
}

impl ValidationError {
    pub fn new(value: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }

    /// The rejected value as text.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {:?} not accepted: {}, expected a positive integer",
            self.value, self.kind
        )
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index/list length mismatch");
        assert_eq!(err.to_string(), "index/list length mismatch");
        assert_eq!(err.message(), "index/list length mismatch");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b.message(), "x");
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- ValidationError --------------------------------------------------

    #[test]
    fn validation_display_names_value_and_kind() {
        let err = ValidationError::new("-1.5", ValueKind::NonInteger);
        let msg = err.to_string();
        assert!(msg.contains("\"-1.5\""), "{msg}");
        assert!(msg.contains("non-integer"), "{msg}");
    }

    #[test]
    fn validation_accessors() {
        let err = ValidationError::new("abc", ValueKind::WrongType);
        assert_eq!(err.value(), "abc");
        assert_eq!(err.kind(), ValueKind::WrongType);
    }

    #[test]
    fn value_kind_labels() {
        assert_eq!(ValueKind::Negative.to_string(), "negative");
        assert_eq!(ValueKind::Zero.to_string(), "zero");
        assert_eq!(ValueKind::NonInteger.to_string(), "non-integer");
        assert_eq!(ValueKind::WrongType.to_string(), "wrong type");
    }

    #[test]
    fn validation_implements_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<ValidationError>();
    }
}
