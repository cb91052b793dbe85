//! Cache configuration.
//!
//! The only tunable is the capacity, which must be a positive integer.
//! [`Capacity`] is that guarantee as a type: once one exists, building a
//! cache cannot fail.
//!
//! ```
//! use lrukit::config::Capacity;
//!
//! let cap: Capacity = "128".parse().unwrap();
//! assert_eq!(cap.get(), 128);
//!
//! assert!(Capacity::try_from(0usize).is_err());
//! assert!(Capacity::try_from(-5i64).is_err());
//! assert!(Capacity::try_from(2.5f64).is_err());
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::ConfigError;

/// Capacity used by `Default` implementations.
pub const DEFAULT_CAPACITY: usize = 16;

/// A validated, strictly positive cache capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Wraps an already non-zero size.
    #[inline]
    pub const fn new(n: NonZeroUsize) -> Self {
        Self(n)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(n: NonZeroUsize) -> Self {
        Self::new(n)
    }
}

fn not_positive(shown: impl fmt::Display) -> ConfigError {
    ConfigError::new(format!("capacity must be a positive integer, got {shown}"))
}

impl TryFrom<usize> for Capacity {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(n).map(Self::new).ok_or_else(|| not_positive(n))
    }
}

macro_rules! capacity_try_from_int {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Capacity {
                type Error = ConfigError;

                fn try_from(n: $t) -> Result<Self, Self::Error> {
                    if i128::from(n) <= 0 {
                        return Err(not_positive(n));
                    }
                    let n = usize::try_from(n).map_err(|_| {
                        ConfigError::new(format!("capacity {n} does not fit in usize"))
                    })?;
                    Capacity::try_from(n)
                }
            }
        )*
    };
}

capacity_try_from_int!(i32, i64, u32, u64);

impl TryFrom<f64> for Capacity {
    type Error = ConfigError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        if !x.is_finite() || x.fract() != 0.0 {
            return Err(not_positive(x));
        }
        if x <= 0.0 {
            return Err(not_positive(x));
        }
        if x > usize::MAX as f64 {
            return Err(ConfigError::new(format!(
                "capacity {x} does not fit in usize"
            )));
        }
        Capacity::try_from(x as usize)
    }
}

impl FromStr for Capacity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Capacity::try_from(n);
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return Capacity::try_from(n);
        }
        Err(not_positive(format!("{s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers_are_accepted() {
        assert_eq!(Capacity::try_from(1usize).map(Capacity::get), Ok(1));
        assert_eq!(Capacity::try_from(2i32).map(Capacity::get), Ok(2));
        assert_eq!(Capacity::try_from(3i64).map(Capacity::get), Ok(3));
        assert_eq!(Capacity::try_from(4u32).map(Capacity::get), Ok(4));
        assert_eq!(Capacity::try_from(5u64).map(Capacity::get), Ok(5));
        assert_eq!(Capacity::try_from(6.0f64).map(Capacity::get), Ok(6));
    }

    #[test]
    fn zero_and_negative_are_rejected() {
        assert!(Capacity::try_from(0usize).is_err());
        assert!(Capacity::try_from(0i32).is_err());
        assert!(Capacity::try_from(-5i32).is_err());
        assert!(Capacity::try_from(-5i64).is_err());
        assert!(Capacity::try_from(0u64).is_err());
        assert!(Capacity::try_from(-1.0f64).is_err());
    }

    #[test]
    fn fractional_and_non_finite_are_rejected() {
        assert!(Capacity::try_from(2.5f64).is_err());
        assert!(Capacity::try_from(f64::NAN).is_err());
        assert!(Capacity::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn error_message_names_the_input() {
        let err = Capacity::try_from(-5i64).unwrap_err();
        assert!(err.message().contains("-5"), "{err}");
        assert!(err.message().contains("capacity"), "{err}");
    }

    #[test]
    fn parses_from_text() {
        assert_eq!("2".parse::<Capacity>().map(Capacity::get), Ok(2));
        assert_eq!(" 10 ".parse::<Capacity>().map(Capacity::get), Ok(10));
        assert!("0".parse::<Capacity>().is_err());
        assert!("-3".parse::<Capacity>().is_err());
        assert!("2.5".parse::<Capacity>().is_err());
        assert!("many".parse::<Capacity>().is_err());
    }

    #[test]
    fn wraps_non_zero_sizes_directly() {
        let n = NonZeroUsize::new(3).unwrap();
        assert_eq!(Capacity::new(n).get(), 3);
        assert_eq!(Capacity::from(n), Capacity::try_from(3usize).unwrap());
    }

    #[test]
    fn default_is_sixteen() {
        assert_eq!(Capacity::default().get(), DEFAULT_CAPACITY);
        assert_eq!(Capacity::default().to_string(), "16");
    }
}
