//! Unit rendering configuration.

use crate::error::ByteSizeError;
use crate::unit::multiplier_for;

/// Resolved options for rendering a byte count in a unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Target unit symbol; empty means raw bytes
    pub unit: String,

    /// Print the bare quotient instead of `<quotient><UNIT>`
    pub numeric: bool,
}

impl FormatOptions {
    /// Check that the configured unit is known before any value is rendered.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::UnknownUnit`] for an unrecognized unit.
    pub fn validate(&self) -> Result<(), ByteSizeError> {
        multiplier_for(&self.unit)
            .map(|_| ())
            .ok_or_else(|| ByteSizeError::unknown_unit(self.unit.as_str()))
    }

    /// `as_string` flag for [`ByteSize::to_unit`](crate::ByteSize::to_unit).
    #[must_use]
    pub fn as_string(&self) -> bool {
        !self.numeric
    }
}
