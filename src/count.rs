//! Exact byte counts.
//!
//! A count is either an integer (the usual case) or a float, which appears
//! when the input carried a decimal point (`"42.5"`, `"1.5M"`).

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use crate::error::ByteSizeError;

/// 2^64, the first float past `u64::MAX`.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// A non-negative number of bytes.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(untagged)]
pub enum ByteCount {
    /// Whole number of bytes
    Int(u64),

    /// Fractional or float-derived number of bytes
    Float(f64),
}

impl ByteCount {
    /// Validate a float count: finite, non-negative and below 2^64.
    ///
    /// `input` is only used to label the error. `-0.0` comes back as `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::InvalidFormat`] for NaN, infinities, negative
    /// values and values that do not fit in 64 bits.
    pub fn checked_float(input: &str, value: f64) -> std::result::Result<Self, ByteSizeError> {
        if !value.is_finite() {
            return Err(ByteSizeError::invalid(input, "size is not a finite number"));
        }
        if value < 0.0 {
            return Err(ByteSizeError::invalid(input, "negative sizes are not supported"));
        }
        if value >= U64_LIMIT {
            return Err(ByteSizeError::invalid(input, "size does not fit in 64 bits"));
        }

        // clears the sign of -0.0
        Ok(Self::Float(value.abs()))
    }

    /// Re-check a count that may have been built directly from its variants.
    ///
    /// # Errors
    ///
    /// Same as [`ByteCount::checked_float`]; integer counts always pass.
    pub fn validated(self) -> std::result::Result<Self, ByteSizeError> {
        match self {
            Self::Int(_) => Ok(self),
            Self::Float(f) => Self::checked_float(&f.to_string(), f),
        }
    }

    /// The count as an integer, truncating any fractional part.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn as_u64(self) -> u64 {
        match self {
            Self::Int(n) => n,
            Self::Float(f) => f.floor() as u64,
        }
    }

    /// The count as a float. Integers above 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    /// Whether this count is held as a float.
    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Truncating division by a unit multiplier.
    ///
    /// Integers use exact integer division. Floats are divided and floored,
    /// and `None` is returned when the quotient is not a valid `u64` (NaN,
    /// negative, or 2^64 and above) or `multiplier` is zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn div_floor(self, multiplier: u64) -> Option<u64> {
        match self {
            Self::Int(n) => n.checked_div(multiplier),
            Self::Float(_) if multiplier == 0 => None,
            Self::Float(f) => {
                let quotient = (f / multiplier as f64).floor();
                (quotient.is_finite() && (0.0..U64_LIMIT).contains(&quotient))
                    .then_some(quotient as u64)
            }
        }
    }
}

impl PartialEq for ByteCount {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialEq<u64> for ByteCount {
    fn eq(&self, other: &u64) -> bool {
        *self == Self::Int(*other)
    }
}

impl PartialEq<f64> for ByteCount {
    fn eq(&self, other: &f64) -> bool {
        *self == Self::Float(*other)
    }
}

impl From<u64> for ByteCount {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ByteCount {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl TryFrom<f64> for ByteCount {
    type Error = ByteSizeError;

    fn try_from(value: f64) -> std::result::Result<Self, Self::Error> {
        Self::checked_float(&value.to_string(), value)
    }
}

impl Display for ByteCount {
    /// Integers print as-is; floats always keep a decimal point (`42.0`).
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ByteCount::Int(42).to_string(), "42");
        assert_eq!(ByteCount::Float(42.5).to_string(), "42.5");
        assert_eq!(ByteCount::Float(42.0).to_string(), "42.0");
        assert_eq!(
            ByteCount::Int(1_000_000_000_000_000).to_string(),
            "1000000000000000"
        );
    }

    #[test]
    fn test_mixed_equality() {
        assert_eq!(ByteCount::Int(42), ByteCount::Float(42.0));
        assert_ne!(ByteCount::Int(42), ByteCount::Float(42.5));
        assert_eq!(ByteCount::Int(10_000), 10_000u64);
        assert_eq!(ByteCount::Float(42.5), 42.5);
    }

    #[test]
    fn test_div_floor_truncates() {
        assert_eq!(ByteCount::Int(1_999).div_floor(1_000), Some(1));
        assert_eq!(ByteCount::Int(999).div_floor(1_000), Some(0));
        assert_eq!(ByteCount::Float(1_500.0).div_floor(1_000), Some(1));
        assert_eq!(ByteCount::Float(999.9).div_floor(1_000), Some(0));
    }

    #[test]
    fn test_div_floor_out_of_range_floats() {
        assert_eq!(ByteCount::Float(1e25).div_floor(1_000), None);
        assert_eq!(ByteCount::Float(-5.0).div_floor(1_000), None);
        assert_eq!(ByteCount::Float(f64::NAN).div_floor(1_000), None);
        assert_eq!(ByteCount::Int(5).div_floor(0), None);
    }

    #[test]
    fn test_checked_float() {
        assert_eq!(ByteCount::checked_float("1.5", 1.5).unwrap(), 1.5);
        assert!(ByteCount::checked_float("-5", -5.0).unwrap_err().is_invalid_format());
        assert!(ByteCount::checked_float("NaN", f64::NAN).unwrap_err().is_invalid_format());
        assert!(ByteCount::checked_float("inf", f64::INFINITY).unwrap_err().is_invalid_format());
        assert!(ByteCount::checked_float("1e20", 1e20).unwrap_err().is_invalid_format());
        assert!(ByteCount::checked_float("2^64", U64_LIMIT).unwrap_err().is_invalid_format());
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let zero = ByteCount::try_from(-0.0).unwrap();

        assert_eq!(zero.to_string(), "0.0");
        assert!(ByteCount::try_from(-1.0).is_err());
        assert!(ByteCount::Float(-1.0).validated().is_err());
        assert!(ByteCount::Int(7).validated().is_ok());
    }

    #[test]
    fn test_as_u64_floors_floats() {
        assert_eq!(ByteCount::Float(42.9).as_u64(), 42);
        assert_eq!(ByteCount::Int(7).as_u64(), 7);
        assert!(ByteCount::Float(1.0).is_float());
        assert!(!ByteCount::Int(1).is_float());
    }
}
