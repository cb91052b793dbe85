//! Input values accepted by `put`.
//!
//! Cached values are positive integers. Callers may hand `put` anything that
//! converts into a [`RawValue`]; [`RawValue::validate`] is the single gate
//! that turns it into the stored `u64` or a [`ValidationError`].
//!
//! | Input                    | Result                    |
//! |--------------------------|---------------------------|
//! | `Int(n)`, `n > 0`        | `Ok(n as u64)`            |
//! | `Int(0)`                 | `Err(Zero)`               |
//! | `Int(n)`, `n < 0`        | `Err(Negative)`           |
//! | `Float(_)`               | `Err(NonInteger)`         |
//! | `Text(_)`                | `Err(WrongType)`          |
//!
//! Text is never parsed here; coercing command tokens into numbers is the
//! job of [`command::coerce_value`](crate::command::coerce_value).

use std::fmt;

use crate::error::{ValidationError, ValueKind};

/// A value as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawValue {
    /// Accepts strictly positive integers.
    pub fn validate(&self) -> Result<u64, ValidationError> {
        match *self {
            RawValue::Int(n) if n > 0 => Ok(n.unsigned_abs()),
            RawValue::Int(0) => Err(self.reject(ValueKind::Zero)),
            RawValue::Int(_) => Err(self.reject(ValueKind::Negative)),
            RawValue::Float(_) => Err(self.reject(ValueKind::NonInteger)),
            RawValue::Text(_) => Err(self.reject(ValueKind::WrongType)),
        }
    }

    fn reject(&self, kind: ValueKind) -> ValidationError {
        ValidationError::new(self.to_string(), kind)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(n) => write!(f, "{n}"),
            RawValue::Float(x) => write!(f, "{x}"),
            RawValue::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! raw_int_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(n: $t) -> Self {
                    RawValue::Int(i64::from(n))
                }
            }
        )*
    };
}

raw_int_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        // Anything past i64::MAX is still a positive integer; saturate rather
        // than wrap into a negative.
        RawValue::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f32> for RawValue {
    fn from(x: f32) -> Self {
        RawValue::Float(f64::from(x))
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_integers_pass() {
        assert_eq!(RawValue::from(1).validate(), Ok(1));
        assert_eq!(RawValue::from(42u32).validate(), Ok(42));
        assert_eq!(RawValue::from(i64::MAX).validate(), Ok(i64::MAX as u64));
    }

    #[test]
    fn zero_and_negatives_are_rejected() {
        let zero = RawValue::from(0).validate().unwrap_err();
        assert_eq!(zero.kind(), ValueKind::Zero);
        assert_eq!(zero.value(), "0");

        let neg = RawValue::from(-2).validate().unwrap_err();
        assert_eq!(neg.kind(), ValueKind::Negative);
        assert_eq!(neg.value(), "-2");

        let min = RawValue::from(i64::MIN).validate().unwrap_err();
        assert_eq!(min.kind(), ValueKind::Negative);
    }

    #[test]
    fn floats_are_never_integers() {
        for x in [-1.5, 2.0, 0.5, f64::NAN, f64::INFINITY] {
            let err = RawValue::from(x).validate().unwrap_err();
            assert_eq!(err.kind(), ValueKind::NonInteger, "{x}");
        }
    }

    #[test]
    fn text_is_wrong_type_even_when_numeric() {
        let err = RawValue::from("abc ").validate().unwrap_err();
        assert_eq!(err.kind(), ValueKind::WrongType);
        assert_eq!(err.value(), "abc ");

        let err = RawValue::from(String::from("5")).validate().unwrap_err();
        assert_eq!(err.kind(), ValueKind::WrongType);
    }

    #[test]
    fn large_unsigned_saturates_positive() {
        assert_eq!(RawValue::from(u64::MAX), RawValue::Int(i64::MAX));
        assert!(RawValue::from(u64::MAX).validate().is_ok());
    }
}
