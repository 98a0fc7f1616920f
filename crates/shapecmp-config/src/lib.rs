//! Configuration system for shapecmp.
//!
//! Load comparison defaults from TOML or YAML files so callers can switch
//! value-mode normalization and skip behaviour without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use shapecmp_config::{CompareConfig, SkipPolicy};
//!
//! let config = CompareConfig::from_toml_str(r#"
//!     by_value = true
//!     skip = "all_empty"
//! "#).unwrap();
//!
//! assert!(config.by_value);
//! assert_eq!(config.skip, SkipPolicy::AllEmpty);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use shapecmp_config::CompareConfig;
//!
//! let config = CompareConfig::load("compare.toml").unwrap_or_default();
//! assert!(!config.by_value);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shapecmp_core::Argument;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings applied to the equality predicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CompareConfig {
    /// Compare numbers and basic scalars by their canonical text.
    #[serde(default)]
    pub by_value: bool,

    /// Which arguments to leave out of comparisons.
    #[serde(default)]
    pub skip: SkipPolicy,
}

impl CompareConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Parses a skip policy name, as accepted in config files.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for an unknown name.
    pub fn parse_skip(name: &str) -> Result<SkipPolicy, ConfigError> {
        match name.trim() {
            "none" | "never" => Ok(SkipPolicy::Never),
            "size_is_empty" => Ok(SkipPolicy::SizeIsEmpty),
            "all_empty" => Ok(SkipPolicy::AllEmpty),
            "any_empty" => Ok(SkipPolicy::AnyEmpty),
            other => Err(ConfigError::Invalid(format!("unknown skip policy `{other}`"))),
        }
    }

    /// Enables or disables value-mode comparison.
    pub fn with_by_value(mut self, by_value: bool) -> Self {
        self.by_value = by_value;
        self
    }

    /// Sets the skip policy.
    pub fn with_skip(mut self, skip: SkipPolicy) -> Self {
        self.skip = skip;
        self
    }
}

/// Which arguments the equality predicates leave out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Compare every argument.
    #[default]
    #[serde(rename = "none", alias = "never")]
    Never,
    /// Skip null arguments and arguments without elements.
    SizeIsEmpty,
    /// Skip arguments whose elements are all null.
    AllEmpty,
    /// Skip arguments that are empty or hold any null element.
    AnyEmpty,
}

impl SkipPolicy {
    /// The per-argument predicate for this policy, if any.
    pub fn predicate(self) -> Option<fn(&mut Argument) -> bool> {
        match self {
            SkipPolicy::Never => None,
            SkipPolicy::SizeIsEmpty => Some(Argument::size_is_empty),
            SkipPolicy::AllEmpty => Some(Argument::is_all_empty),
            SkipPolicy::AnyEmpty => Some(Argument::is_any_empty),
        }
    }
}
