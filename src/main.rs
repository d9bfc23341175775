//! # galaxy-bytesize
//!
//! Parse human-readable byte sizes and render byte counts in decimal or
//! binary units.
//!
//! ## Usage
//!
//! ```bash
//! # Parse sizes into byte counts
//! galaxy-bytesize parse 10K "10 KI" 1.5G
//!
//! # Render a byte count in a unit
//! galaxy-bytesize format 1000000000000000 --unit ti
//!
//! # Same, as a bare number in JSON
//! galaxy-bytesize format 1P --unit k --numeric --json
//!
//! # Show the unit table
//! galaxy-bytesize units
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use galaxy_bytesize::{
    cli::{Cli, Command},
    config::FileConfig,
    logging,
    output::{self, FormatReport, ParseReport},
};
use std::process::exit;

/// Entry point for the galaxy-bytesize application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err:#}", "Error:".red().bold());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Installs the tracing subscriber
/// 4. Runs the requested subcommand and prints its report
///
/// # Errors
///
/// This function can return errors from:
/// - Logging initialisation
/// - Size parsing or unit lookup
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !args.json() {
                eprintln!("{} {e:#}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    };

    let execution_options = args.execution_options(&file_config);
    logging::init(execution_options.verbose)?;

    tracing::debug!(
        json = execution_options.json,
        verbose = execution_options.verbose,
        "starting"
    );

    match &args.command {
        Command::Parse { values, formatting } => {
            let format_options = formatting.validated_format_options(&file_config)?;

            let reports = values
                .iter()
                .map(|value| {
                    ParseReport::build(value, &format_options)
                        .with_context(|| format!("Failed to parse '{value}'"))
                })
                .collect::<Result<Vec<_>>>()?;

            if execution_options.json {
                println!("{}", output::to_json(&reports)?);
            } else {
                output::print_parse_reports(&reports);
            }
        }

        Command::Format { value, formatting } => {
            let format_options = formatting.format_options(&file_config);
            let report = FormatReport::build(value, &format_options)
                .with_context(|| format!("Failed to format '{value}'"))?;

            if execution_options.json {
                println!("{}", output::to_json(&report)?);
            } else {
                output::print_format_report(&report);
            }
        }

        Command::Units => {
            let reports = output::unit_reports();

            if execution_options.json {
                println!("{}", output::to_json(&reports)?);
            } else {
                output::print_unit_reports(&reports);
            }
        }
    }

    Ok(())
}
