//! Configuration types for padding-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for padding-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset whose patterns come before the configured ones
    /// (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing exit (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Parses `fail_on`, defaulting to `error`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Option`] for an unknown severity name.
    pub fn fail_on_severity(&self) -> Result<crate::Severity, ConfigError> {
        self.fail_on
            .as_deref()
            .map_or(Ok(crate::Severity::Error), |s| {
                s.parse().map_err(|message| ConfigError::Option {
                    key: "fail_on".to_string(),
                    message,
                })
            })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default = "default_excludes")]
    pub exclude: Vec<String>,

    /// Glob patterns to include (if empty, every file a parser accepts).
    #[serde(default)]
    pub include: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Upper bound on lint-and-fix passes per file in fix mode.
    #[serde(default = "default_max_fix_passes")]
    pub max_fix_passes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: default_excludes(),
            include: Vec::new(),
            respect_gitignore: true,
            max_fix_passes: default_max_fix_passes(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_excludes() -> Vec<String> {
    vec!["**/node_modules/**".to_string(), "**/dist/**".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_max_fix_passes() -> usize {
    10
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,

    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Gets an option value as a specific type, ignoring malformed values.
    #[must_use]
    pub fn get_option<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_option(key).ok().flatten()
    }

    /// Gets an option value as a specific type.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Option`] if the value does not deserialize into `T`.
    pub fn try_option<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, ConfigError> {
        self.options
            .get(key)
            .map(|v| {
                v.clone().try_into().map_err(|e: toml::de::Error| ConfigError::Option {
                    key: key.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A rule option has the wrong shape.
    #[error("Invalid option `{key}`: {message}")]
    Option {
        /// Option key.
        key: String,
        /// What was wrong with it.
        message: String,
    },
}
