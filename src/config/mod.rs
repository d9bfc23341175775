//! Configuration types and options for the application.
//!
//! This module contains the configuration structures used by the command
//! layer: the persistent config file and the resolved format and execution
//! options built from it and the command line.

pub mod execution;
pub mod file;
pub mod format;

pub use execution::ExecutionOptions;
pub use file::FileConfig;
pub use format::FormatOptions;
