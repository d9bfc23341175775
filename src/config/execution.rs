//! Execution configuration shared by every subcommand.
//!
//! This module defines the options that control how results are reported,
//! independent of which subcommand produced them.

/// Configuration for output and diagnostics.
#[derive(Clone, Debug, Default)]
pub struct ExecutionOptions {
    /// Whether to emit a single JSON document instead of coloured text
    pub json: bool,

    /// Verbosity level for tracing (0 = warnings only)
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_options_creation() {
        let exec_opts = ExecutionOptions {
            json: true,
            verbose: 2,
        };

        assert!(exec_opts.json);
        assert_eq!(exec_opts.verbose, 2);
    }

    #[test]
    fn test_execution_options_default() {
        let exec_opts = ExecutionOptions::default();

        assert!(!exec_opts.json);
        assert_eq!(exec_opts.verbose, 0);
    }
}
