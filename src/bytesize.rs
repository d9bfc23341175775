//! The [`ByteSize`] value type and unit-scaled rendering.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::count::ByteCount;
use crate::error::ByteSizeError;
use crate::parser::parse_bytesize;
use crate::unit::{SizeUnit, multiplier_for};

/// Result of [`ByteSize::to_unit`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UnitValue {
    /// Quotient followed by the upper-case unit symbol, e.g. `1000T`
    Text(String),

    /// Bare quotient, no unit attached
    Count(ByteCount),
}

impl UnitValue {
    /// The textual form, if this value was rendered as a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Count(_) => None,
        }
    }

    /// The numeric form, if this value was requested as a number.
    #[must_use]
    pub fn as_count(&self) -> Option<ByteCount> {
        match self {
            Self::Text(_) => None,
            Self::Count(c) => Some(*c),
        }
    }
}

impl Display for UnitValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(c) => write!(f, "{c}"),
        }
    }
}

/// An immutable number of bytes.
///
/// Build one from a whole byte count with [`ByteSize::new`], from a float or
/// an arbitrary [`ByteCount`] with [`ByteSize::try_new`], or from a size
/// string with [`ByteSize::parse`] (also available through [`FromStr`]).
/// Every constructor keeps the count non-negative, finite and below 2^64.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ByteSize {
    bytes: ByteCount,
}

impl ByteSize {
    /// Wrap a whole number of bytes.
    #[must_use]
    pub fn new(bytes: u64) -> Self {
        Self {
            bytes: ByteCount::Int(bytes),
        }
    }

    /// Wrap a byte count that may hold a float.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::InvalidFormat`] for negative, NaN, infinite
    /// or out-of-range float counts.
    pub fn try_new(bytes: ByteCount) -> Result<Self, ByteSizeError> {
        Ok(Self {
            bytes: bytes.validated()?,
        })
    }

    /// Parse a size string such as `"10 GI"`.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::InvalidFormat`] when the string is not a valid size.
    pub fn parse(input: &str) -> Result<Self, ByteSizeError> {
        parse_bytesize(input).and_then(Self::try_new)
    }

    /// The underlying byte count.
    #[must_use]
    pub fn bytes(&self) -> ByteCount {
        self.bytes
    }

    /// Express this size in `unit`.
    ///
    /// The quotient is truncated, never rounded: one petabyte in `E` is `0E`.
    /// With an empty `unit` the raw count is returned unscaled.
    ///
    /// # Arguments
    ///
    /// * `unit` - Unit symbol, case-insensitive (`"k"`, `"GI"`, or `""` for bytes)
    /// * `as_string` - Render as `<quotient><UNIT>` when `true`, return the bare
    ///   quotient when `false`
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::UnknownUnit`] if `unit` is not in the unit table.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galaxy_bytesize::{ByteSize, UnitValue};
    /// let size = ByteSize::new(1_000_000_000_000_000u64);
    /// assert_eq!(size.to_unit("t", true).unwrap(), UnitValue::Text("1000T".into()));
    /// assert_eq!(size.to_unit("e", true).unwrap(), UnitValue::Text("0E".into()));
    /// ```
    pub fn to_unit(&self, unit: &str, as_string: bool) -> Result<UnitValue, ByteSizeError> {
        let multiplier = multiplier_for(unit).ok_or_else(|| ByteSizeError::unknown_unit(unit))?;

        if multiplier == 1 {
            return Ok(if as_string {
                UnitValue::Text(self.bytes.to_string())
            } else {
                UnitValue::Count(self.bytes)
            });
        }

        let quotient = self.bytes.div_floor(multiplier).ok_or_else(|| {
            ByteSizeError::invalid(self.bytes.to_string(), "size does not fit in 64 bits")
        })?;
        if !as_string {
            return Ok(UnitValue::Count(ByteCount::Int(quotient)));
        }

        // multiplier > 1 implies a table hit
        let symbol = SizeUnit::lookup(unit).map_or("", |u| u.symbol);
        Ok(UnitValue::Text(format!("{quotient}{symbol}")))
    }

    /// Shorthand for `to_unit(unit, true)`.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::UnknownUnit`] if `unit` is not in the unit table.
    pub fn to_unit_string(&self, unit: &str) -> Result<String, ByteSizeError> {
        self.to_unit(unit, true).map(|v| v.to_string())
    }

    /// Shorthand for `to_unit(unit, false)`.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::UnknownUnit`] if `unit` is not in the unit table.
    pub fn to_unit_count(&self, unit: &str) -> Result<ByteCount, ByteSizeError> {
        let value = self.to_unit(unit, false)?;
        Ok(value.as_count().unwrap_or(self.bytes))
    }
}

impl From<u64> for ByteSize {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl TryFrom<f64> for ByteSize {
    type Error = ByteSizeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        ByteCount::try_from(value).and_then(Self::try_new)
    }
}

impl TryFrom<ByteCount> for ByteSize {
    type Error = ByteSizeError;

    fn try_from(value: ByteCount) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl FromStr for ByteSize {
    type Err = ByteSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for ByteSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes)
    }
}

impl Serialize for ByteSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bytes.serialize(serializer)
    }
}

struct ByteSizeVisitor;

impl Visitor<'_> for ByteSizeVisitor {
    type Value = ByteSize;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative byte count or a size string like \"10 GI\"")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ByteSize::new(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(ByteSize::new)
            .map_err(|_| E::custom("negative sizes are not supported"))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        ByteSize::try_from(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        ByteSize::parse(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ByteSize {
    /// Accepts a number (taken as bytes) or a size string.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ByteSizeVisitor)
    }
}
