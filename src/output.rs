//! Report building and rendering.
//!
//! Each subcommand produces serializable report records. They are printed as
//! coloured text by default, or as one pretty-printed JSON document when
//! `--json` is active.

use colored::Colorize;
use humansize::{DECIMAL, format_size};
use serde::Serialize;

use crate::bytesize::{ByteSize, UnitValue};
use crate::config::FormatOptions;
use crate::count::ByteCount;
use crate::error::ByteSizeError;
use crate::parser::parse_bytesize;
use crate::unit::{SizeUnit, UNITS, UnitSystem};

/// Outcome of parsing one size string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseReport {
    /// The string as given
    pub input: String,

    /// Exact byte count
    pub bytes: ByteCount,

    /// Approximate decimal rendering, e.g. `10 kB`
    pub human: String,

    /// The count re-rendered in the requested unit, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<UnitValue>,
}

impl ParseReport {
    /// Parse `input` and, when `opts.unit` is set, render it in that unit.
    ///
    /// # Errors
    ///
    /// Returns [`ByteSizeError::InvalidFormat`] for malformed input and
    /// [`ByteSizeError::UnknownUnit`] for an unknown target unit.
    pub fn build(input: &str, opts: &FormatOptions) -> Result<Self, ByteSizeError> {
        let bytes = parse_bytesize(input)?;
        let rendered = if opts.unit.trim().is_empty() {
            None
        } else {
            Some(ByteSize::try_new(bytes)?.to_unit(&opts.unit, opts.as_string())?)
        };

        Ok(Self {
            input: input.to_string(),
            bytes,
            human: format_size(bytes.as_u64(), DECIMAL),
            rendered,
        })
    }
}

/// Outcome of rendering one value in a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatReport {
    /// The value as given
    pub input: String,

    /// Exact byte count the value stands for
    pub bytes: ByteCount,

    /// Canonical upper-case unit symbol, empty for raw bytes
    pub unit: String,

    /// The rendered value
    pub value: UnitValue,
}

impl FormatReport {
    /// Interpret `input` as a size and render it according to `opts`.
    ///
    /// # Errors
    ///
    /// Same as [`ParseReport::build`].
    pub fn build(input: &str, opts: &FormatOptions) -> Result<Self, ByteSizeError> {
        let size = ByteSize::parse(input)?;
        let value = size.to_unit(&opts.unit, opts.as_string())?;
        let unit = SizeUnit::lookup(&opts.unit)
            .map(|u| u.symbol.to_string())
            .unwrap_or_default();

        Ok(Self {
            input: input.to_string(),
            bytes: size.bytes(),
            unit,
            value,
        })
    }
}

/// One row of the unit table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    /// Canonical upper-case symbol
    pub symbol: &'static str,

    /// Bytes per unit
    pub multiplier: u64,

    /// Decimal or binary family
    pub system: UnitSystem,
}

/// The unit table as report rows, in table order.
#[must_use]
pub fn unit_reports() -> Vec<UnitReport> {
    UNITS
        .iter()
        .map(|u| UnitReport {
            symbol: u.symbol,
            multiplier: u.multiplier,
            system: u.system,
        })
        .collect()
}

/// Pretty-printed JSON for any report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize + ?Sized>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Print one line per parsed value: input, byte count, rendering and approximation.
pub fn print_parse_reports(reports: &[ParseReport]) {
    for report in reports {
        let mut line = format!(
            "{} {} {}",
            report.input.bright_white(),
            "=>".dimmed(),
            format!("{} bytes", report.bytes).green().bold(),
        );
        if let Some(rendered) = &report.rendered {
            line.push_str(&format!(" {}", format!("({rendered})").cyan()));
        }
        line.push_str(&format!(" {}", format!("~ {}", report.human).dimmed()));
        println!("{line}");
    }
}

/// Print the rendered value alone.
pub fn print_format_report(report: &FormatReport) {
    println!("{}", report.value.to_string().green().bold());
}

/// Print the unit table as aligned rows.
pub fn print_unit_reports(reports: &[UnitReport]) {
    println!("{}", "Unit multipliers:".bold());
    for report in reports {
        let system = match report.system {
            UnitSystem::Decimal => "decimal".yellow(),
            UnitSystem::Binary => "binary".cyan(),
        };
        println!("  {:<3} {:>22}  {system}", report.symbol, report.multiplier);
    }
}
