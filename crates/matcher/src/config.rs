use serde::{Deserialize, Serialize};

use crate::builtin::DEFAULT_CONTAINS_MIN_CHARS;
use crate::types::MatchError;

/// Configuration for a [`MatcherSet`](crate::MatcherSet) built from the
/// built-in strategies.
///
/// `MatcherConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level configs; every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Configuration schema version.
    #[serde(default = "MatcherConfig::default_version")]
    pub version: u32,
    /// Strategy keys to leave out of the set (e.g. `["contains"]`).
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Shortest term, in characters, the `contains` strategy accepts.
    #[serde(default = "MatcherConfig::default_contains_min_chars")]
    pub contains_min_chars: usize,
    /// Whether an empty term short-circuits to no results before any strategy
    /// runs. Without this, `startsWith` matches every token on an empty term.
    #[serde(default = "MatcherConfig::default_skip_empty_terms")]
    pub skip_empty_terms: bool,
}

impl MatcherConfig {
    pub(crate) fn default_version() -> u32 {
        1
    }

    pub(crate) fn default_contains_min_chars() -> usize {
        DEFAULT_CONTAINS_MIN_CHARS
    }

    pub(crate) fn default_skip_empty_terms() -> bool {
        true
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "config.version must be >= 1".into(),
            ));
        }
        if self.contains_min_chars == 0 {
            return Err(MatchError::InvalidConfig(
                "contains_min_chars must be greater than zero".into(),
            ));
        }
        if self.exclude.iter().any(|key| key.trim().is_empty()) {
            return Err(MatchError::InvalidConfig(
                "exclude must not contain empty keys".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            exclude: Vec::new(),
            contains_min_chars: Self::default_contains_min_chars(),
            skip_empty_terms: Self::default_skip_empty_terms(),
        }
    }
}
