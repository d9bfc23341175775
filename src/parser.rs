//! Parsing of human-readable size strings.
//!
//! A size string is a decimal literal optionally followed by a unit symbol
//! from the [unit table](crate::unit), with optional whitespace in between:
//! `42`, `42.5`, `10K`, `10 KI`, `1.5gi`. Numeric inputs are passed through
//! untouched.

use crate::count::ByteCount;
use crate::error::ByteSizeError;
use crate::unit::SizeUnit;

/// Anything [`parse_bytesize`] accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeInput<'a> {
    /// An integer byte count, returned unchanged
    Int(u64),

    /// A float byte count, returned unchanged
    Float(f64),

    /// A size string to interpret
    Text(&'a str),
}

impl From<u64> for SizeInput<'_> {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SizeInput<'_> {
    fn from(value: u32) -> Self {
        Self::Int(u64::from(value))
    }
}

impl From<usize> for SizeInput<'_> {
    fn from(value: usize) -> Self {
        Self::Int(value as u64)
    }
}

impl From<f64> for SizeInput<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for SizeInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for SizeInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

/// Convert a number or a size string into an exact byte count.
///
/// Numbers are returned as they are. Strings are trimmed, split into a
/// numeric part and a unit part, and the number is scaled by the unit's
/// multiplier. Without a unit the number itself is returned, as an integer
/// unless it contains a decimal point.
///
/// # Errors
///
/// Returns [`ByteSizeError::InvalidFormat`] if:
/// - the numeric part is missing or is not a valid decimal literal
/// - the unit part is not a known unit symbol
/// - the value is negative, not finite, or does not fit in 64 bits
///
/// # Examples
///
/// ```
/// # use galaxy_bytesize::parse_bytesize;
/// assert_eq!(parse_bytesize("10K").unwrap(), 10_000u64);
/// assert_eq!(parse_bytesize("10 KI").unwrap(), 10_240u64);
/// assert_eq!(parse_bytesize(42u64).unwrap(), 42u64);
/// assert!(parse_bytesize("1x0").is_err());
/// ```
pub fn parse_bytesize<'a>(value: impl Into<SizeInput<'a>>) -> Result<ByteCount, ByteSizeError> {
    match value.into() {
        SizeInput::Int(n) => Ok(ByteCount::Int(n)),
        SizeInput::Float(f) => ByteCount::try_from(f),
        SizeInput::Text(s) => parse_str(s),
    }
}

fn parse_str(input: &str) -> Result<ByteCount, ByteSizeError> {
    let trimmed = input.trim();
    let (number, unit) = split_number(trimmed);

    if number.is_empty() {
        return Err(ByteSizeError::invalid(input, "missing number"));
    }

    let unit = unit.trim();
    let multiplier = if unit.is_empty() {
        None
    } else {
        let found = SizeUnit::lookup(unit).ok_or_else(|| {
            ByteSizeError::invalid(
                input,
                format!("unrecognized unit '{}'", unit.to_ascii_uppercase()),
            )
        })?;
        Some(found.multiplier)
    };

    let count = if number.contains('.') {
        let value: f64 = number
            .parse()
            .map_err(|_| ByteSizeError::invalid(input, "not a valid decimal number"))?;
        #[allow(clippy::cast_precision_loss)]
        let scaled = multiplier.map_or(value, |m| value * m as f64);
        ByteCount::checked_float(input, scaled)?
    } else {
        let value = parse_integer(input, number)?;
        let scaled = match multiplier {
            Some(m) => value
                .checked_mul(m)
                .ok_or_else(|| ByteSizeError::invalid(input, "size does not fit in 64 bits"))?,
            None => value,
        };
        ByteCount::Int(scaled)
    };

    tracing::trace!(input, bytes = %count, "parsed size");
    Ok(count)
}

/// Split `s` after the longest prefix made of an optional sign, digits and dots.
fn split_number(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '+' || c == '-'))))
        .map_or(s.len(), |(i, _)| i);

    s.split_at(end)
}

/// Integer literal with an optional sign. `-0` is tolerated, other negatives are not.
fn parse_integer(input: &str, number: &str) -> Result<u64, ByteSizeError> {
    let (negative, digits) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };

    if digits.is_empty() {
        return Err(ByteSizeError::invalid(input, "missing number"));
    }

    let value: u64 = digits.parse().map_err(|_| {
        ByteSizeError::invalid(input, "integer does not fit in 64 bits")
    })?;

    if negative && value != 0 {
        return Err(ByteSizeError::invalid(input, "negative sizes are not supported"));
    }

    Ok(value)
}
