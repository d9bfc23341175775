//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/galaxy-bytesize/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [format]
//! unit = "gi"
//! numeric = false
//!
//! [output]
//! json = false
//!
//! [logging]
//! verbose = 1
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Unit rendering options
    #[serde(default)]
    pub format: FileFormatConfig,

    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,

    /// Logging options
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

/// Unit rendering options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileFormatConfig {
    /// Default target unit (e.g., `"gi"`, `"M"`); empty means raw bytes
    pub unit: Option<String>,

    /// Whether to print bare quotients instead of `<quotient><UNIT>` strings
    pub numeric: Option<bool>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Whether to emit JSON instead of text
    pub json: Option<bool>,
}

/// Logging options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    /// Verbosity level, same scale as repeated `-v` flags
    pub verbose: Option<u8>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/galaxy-bytesize/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("galaxy-bytesize").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path, falling back to defaults when
    /// the file does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`FileConfig::load`].
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.format.unit.is_none());
        assert!(config.format.numeric.is_none());
        assert!(config.output.json.is_none());
        assert!(config.logging.verbose.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[format]
unit = "gi"
numeric = true

[output]
json = true

[logging]
verbose = 2
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.format.unit, Some("gi".to_string()));
        assert_eq!(config.format.numeric, Some(true));
        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.logging.verbose, Some(2));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[format]
unit = "M"
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.format.unit, Some("M".to_string()));
        assert!(config.format.numeric.is_none());
        assert!(config.output.json.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.format.unit.is_none());
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[format]
numeric = "yes please"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_field_errors() {
        let toml_content = r#"
[format]
precision = 2
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with("galaxy-bytesize/config.toml"));
        }
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let config = FileConfig::load_from(Path::new("/nonexistent/galaxy-bytesize.toml")).unwrap();

        assert!(config.format.unit.is_none());
        assert!(config.output.json.is_none());
    }
}
