//! Command-line interface definition.
//!
//! Arguments are layered over the configuration file: anything given on the
//! command line wins, then the config file, then built-in defaults.

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};

use crate::config::{ExecutionOptions, FileConfig, FormatOptions};

#[derive(Args, Debug, Default)]
pub struct FormattingArgs {
    /// Target unit (k, m, g, t, p, e, ki, mi, gi, ti, pi, ei); case-insensitive
    #[arg(short = 'u', long)]
    pub unit: Option<String>,

    /// Print the bare quotient instead of `<quotient><UNIT>`
    #[arg(short = 'n', long)]
    pub numeric: bool,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Emit a single JSON document on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (repeatable; RUST_LOG overrides)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse size strings such as `10K` or `4 GI` into byte counts
    Parse {
        /// One or more sizes to parse
        #[arg(required = true)]
        values: Vec<String>,

        /// Rendering options for the parsed value
        #[command(flatten)]
        formatting: FormattingArgs,
    },

    /// Render a byte count (or size string) in a unit
    Format {
        /// Byte count or size string
        value: String,

        /// Rendering options
        #[command(flatten)]
        formatting: FormattingArgs,
    },

    /// List known unit symbols and their multipliers
    Units,
}

#[derive(Parser, Debug)]
#[command(name = "galaxy-bytesize")]
#[command(version, about = "Parse and format human-readable byte sizes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output options
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Cli {
    /// Resolve execution options: CLI flags, then config file, then defaults.
    #[must_use]
    pub fn execution_options(&self, config: &FileConfig) -> ExecutionOptions {
        ExecutionOptions {
            json: self.output.json || config.output.json.unwrap_or(false),
            verbose: if self.output.verbose > 0 {
                self.output.verbose
            } else {
                config.logging.verbose.unwrap_or(0)
            },
        }
    }

    /// Whether JSON mode is requested on the command line alone.
    #[must_use]
    pub fn json(&self) -> bool {
        self.output.json
    }
}

impl FormattingArgs {
    /// Resolve format options: CLI flags, then config file, then defaults.
    #[must_use]
    pub fn format_options(&self, config: &FileConfig) -> FormatOptions {
        FormatOptions {
            unit: self
                .unit
                .clone()
                .or_else(|| config.format.unit.clone())
                .unwrap_or_default(),
            numeric: self.numeric || config.format.numeric.unwrap_or(false),
        }
    }

    /// Resolve format options and reject an unknown target unit up front,
    /// whether it came from `--unit` or from the config file.
    ///
    /// # Errors
    ///
    /// Returns an error wrapping [`ByteSizeError::UnknownUnit`](crate::ByteSizeError::UnknownUnit).
    pub fn validated_format_options(&self, config: &FileConfig) -> anyhow::Result<FormatOptions> {
        let opts = self.format_options(config);
        opts.validate().context("Invalid target unit")?;
        Ok(opts)
    }
}
