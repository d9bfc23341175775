//! Error kinds raised by size parsing and unit conversion.
//!
//! There are exactly two failure modes: a size string that cannot be read
//! ([`ByteSizeError::InvalidFormat`]) and a target unit that is not in the
//! unit table ([`ByteSizeError::UnknownUnit`]).

use thiserror::Error;

/// Errors produced by [`parse_bytesize`](crate::parse_bytesize) and
/// [`ByteSize::to_unit`](crate::ByteSize::to_unit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ByteSizeError {
    /// The numeric or unit portion of a size string could not be interpreted.
    #[error("invalid size '{input}': {reason}")]
    InvalidFormat {
        /// The offending input, as given by the caller
        input: String,

        /// Short description of what was wrong with it
        reason: String,
    },

    /// The requested unit symbol is not in the unit table.
    #[error("unknown unit '{unit}'")]
    UnknownUnit {
        /// The symbol that failed the lookup
        unit: String,
    },
}

impl ByteSizeError {
    pub(crate) fn invalid(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_unit(unit: impl Into<String>) -> Self {
        Self::UnknownUnit { unit: unit.into() }
    }

    /// Returns `true` for the invalid-format kind.
    #[must_use]
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }

    /// Returns `true` for the unknown-unit kind.
    #[must_use]
    pub fn is_unknown_unit(&self) -> bool {
        matches!(self, Self::UnknownUnit { .. })
    }
}
