//! Configuration types for the tokenizer.
//!
//! [`TokenizeConfig`] controls how item text is normalized before it is split
//! into [`Token`](crate::Token)s. Casing is never touched here: tokens keep the
//! original case and the matchers compare case-insensitively.
//!
//! # Examples
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! assert!(!config.strip_punctuation);
//! ```
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig {
//!     strip_punctuation: true,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TokenizeError;

/// Configuration for the tokenizer.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configuration files.
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": true,
///   "strip_punctuation": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Version of the tokenization behavior. Must be >= 1; version 0 is
    /// reserved and rejected with [`TokenizeError::InvalidConfig`].
    #[serde(default = "TokenizeConfig::default_version")]
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before splitting.
    ///
    /// Composed and decomposed forms of the same text (`"Caf\u{e9}"` and
    /// `"Cafe\u{301}"`) then produce identical tokens, so a term typed in
    /// either form matches both.
    #[serde(default = "TokenizeConfig::default_normalize_unicode")]
    pub normalize_unicode: bool,

    /// If true, Unicode punctuation acts as a token delimiter and is dropped.
    ///
    /// ```text
    /// "Hello, world!"    → ["Hello", "world"]
    /// "email@domain.com" → ["email", "domain", "com"]
    /// ```
    #[serde(default)]
    pub strip_punctuation: bool,
}

impl TokenizeConfig {
    fn default_version() -> u32 {
        1
    }

    fn default_normalize_unicode() -> bool {
        true
    }

    /// Validate the configuration before use.
    pub fn validate(&self) -> Result<(), TokenizeError> {
        if self.version == 0 {
            return Err(TokenizeError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            normalize_unicode: Self::default_normalize_unicode(),
            strip_punctuation: false,
        }
    }
}
