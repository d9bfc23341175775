//! The unit multiplier table.
//!
//! Decimal (SI) units scale by powers of 1000 and binary (IEC) units by powers
//! of 1024. A binary symbol is its decimal counterpart with an `I` appended,
//! so `K` pairs with `KI`, `P` with `PI`, and so on. Symbols are matched
//! case-insensitively and stored in their canonical upper-case form, which is
//! also how they are rendered.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

/// The prefix family a unit belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Powers of 1000 (K, M, G, T, P, E)
    Decimal,

    /// Powers of 1024 (KI, MI, GI, TI, PI, EI)
    Binary,
}

/// A single entry of the unit table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SizeUnit {
    /// Canonical upper-case symbol
    pub symbol: &'static str,

    /// Number of bytes in one of this unit
    pub multiplier: u64,

    /// Prefix family
    pub system: UnitSystem,
}

const fn decimal(symbol: &'static str, exp: u32) -> SizeUnit {
    SizeUnit {
        symbol,
        multiplier: 1000u64.pow(exp),
        system: UnitSystem::Decimal,
    }
}

const fn binary(symbol: &'static str, exp: u32) -> SizeUnit {
    SizeUnit {
        symbol,
        multiplier: 1024u64.pow(exp),
        system: UnitSystem::Binary,
    }
}

/// Every prefixed unit, decimal first, each family in ascending order.
///
/// The bare byte (empty symbol, multiplier 1) is not listed here; see
/// [`multiplier_for`].
pub static UNITS: [SizeUnit; 12] = [
    decimal("K", 1),
    decimal("M", 2),
    decimal("G", 3),
    decimal("T", 4),
    decimal("P", 5),
    decimal("E", 6),
    binary("KI", 1),
    binary("MI", 2),
    binary("GI", 3),
    binary("TI", 4),
    binary("PI", 5),
    binary("EI", 6),
];

impl SizeUnit {
    /// Look up a prefixed unit by symbol, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for the empty symbol and for anything not in [`UNITS`].
    #[must_use]
    pub fn lookup(symbol: &str) -> Option<&'static Self> {
        let canonical = symbol.trim().to_ascii_uppercase();
        UNITS.iter().find(|unit| unit.symbol == canonical)
    }
}

impl Display for SizeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.symbol)
    }
}

/// Multiplier for `symbol`, where the empty (or all-whitespace) symbol means
/// plain bytes.
#[must_use]
pub fn multiplier_for(symbol: &str) -> Option<u64> {
    if symbol.trim().is_empty() {
        return Some(1);
    }

    SizeUnit::lookup(symbol).map(|unit| unit.multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_multipliers() {
        assert_eq!(multiplier_for("k"), Some(1_000));
        assert_eq!(multiplier_for("m"), Some(1_000_000));
        assert_eq!(multiplier_for("g"), Some(1_000_000_000));
        assert_eq!(multiplier_for("t"), Some(1_000_000_000_000));
        assert_eq!(multiplier_for("p"), Some(1_000_000_000_000_000));
        assert_eq!(multiplier_for("e"), Some(1_000_000_000_000_000_000));
    }

    #[test]
    fn test_binary_multipliers() {
        assert_eq!(multiplier_for("ki"), Some(1 << 10));
        assert_eq!(multiplier_for("mi"), Some(1 << 20));
        assert_eq!(multiplier_for("gi"), Some(1 << 30));
        assert_eq!(multiplier_for("ti"), Some(1 << 40));
        assert_eq!(multiplier_for("pi"), Some(1 << 50));
        assert_eq!(multiplier_for("ei"), Some(1 << 60));
    }

    #[test]
    fn test_empty_symbol_is_bytes() {
        assert_eq!(multiplier_for(""), Some(1));
        assert_eq!(multiplier_for("  "), Some(1));
        assert!(SizeUnit::lookup("").is_none());
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let lower = SizeUnit::lookup("gi").unwrap();
        let upper = SizeUnit::lookup("GI").unwrap();
        let mixed = SizeUnit::lookup(" gI ").unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
        assert_eq!(lower.symbol, "GI");
        assert_eq!(lower.system, UnitSystem::Binary);
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(SizeUnit::lookup("invalid").is_none());
        assert!(SizeUnit::lookup("b").is_none());
        assert!(SizeUnit::lookup("kib").is_none());
        assert_eq!(multiplier_for("x0"), None);
    }

    #[test]
    fn test_binary_symbols_extend_decimal_ones() {
        let (decimal, binary) = UNITS.split_at(6);

        for (d, b) in decimal.iter().zip(binary) {
            assert_eq!(format!("{d}I"), b.to_string());
            assert!(b.multiplier > d.multiplier);
        }
    }
}
