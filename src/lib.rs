//! # galaxy-bytesize
//!
//! Parse human-readable byte sizes into exact byte counts and render byte
//! counts back in decimal (`K`, `M`, ... `E`) or binary (`KI`, `MI`, ... `EI`)
//! units.
//!
//! This library provides the core functionality for the galaxy-bytesize CLI
//! tool, and is small enough to be used directly by scripts that read sizes
//! from configuration files.
//!
//! ```
//! use galaxy_bytesize::{ByteSize, parse_bytesize};
//!
//! assert_eq!(parse_bytesize("10 KI").unwrap(), 10_240u64);
//! assert_eq!(ByteSize::new(1_000_000_000_000_000u64).to_unit_string("ti").unwrap(), "909TI");
//! ```

pub mod bytesize;
pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod unit;

pub use bytesize::{ByteSize, UnitValue};
pub use count::ByteCount;
pub use error::ByteSizeError;
pub use parser::{SizeInput, parse_bytesize};
pub use unit::{SizeUnit, UNITS, UnitSystem};
