//! YAML configuration file support.
//!
//! Loads the tokenizer and matcher configuration from a single YAML file so a
//! search service can tune matching without a rebuild.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "catalog search"
//!
//! tokenize:
//!   version: 1
//!   normalize_unicode: true
//!   strip_punctuation: true
//!
//! matcher:
//!   version: 1
//!   exclude: ["contains"]
//!   contains_min_chars: 3
//!   skip_empty_terms: true
//! ```
//!
//! Every section and field is optional and falls back to its default.

use std::fs;
use std::path::Path;

use canonical::TokenizeConfig;
use matcher::{MatchError, MatcherConfig, MatcherSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for tokenization and term matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FullTextConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Tokenizer configuration
    #[serde(default)]
    pub tokenize: TokenizeConfig,

    /// Matcher configuration
    #[serde(default)]
    pub matcher: MatcherConfig,
}

impl FullTextConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), name = ?config.name, "config_loaded");
        Ok(config)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FullTextConfig = serde_yaml::from_str(yaml)?;
        if let Err(err) = config.validate() {
            warn!(error = %err, "config_rejected");
            return Err(err);
        }
        Ok(config)
    }

    /// Build the matcher set described by the `matcher` section.
    pub fn matcher_set<T>(&self) -> Result<MatcherSet<T>, MatchError> {
        MatcherSet::from_config(&self.matcher)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.tokenize
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("tokenize: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;

        Ok(())
    }
}

impl Default for FullTextConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            name: None,
            tokenize: TokenizeConfig::default(),
            matcher: MatcherConfig::default(),
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
