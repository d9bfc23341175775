//! Diagnostics setup for the binary.
//!
//! The library emits `trace`/`debug` events only; nothing is printed unless a
//! subscriber is installed here.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given `-v` count.
#[must_use]
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing compact lines to stderr.
///
/// `RUST_LOG` takes precedence over `verbose` when it is set.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(verbose: u8) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}
