use std::borrow::Cow;
use std::fmt;

use canonical::{fold_case, Token};
use serde::Serialize;
use thiserror::Error;

/// Key of the exact-equality strategy.
pub const EQUALS_KEY: &str = "equals";
/// Key of the prefix strategy.
pub const STARTS_WITH_KEY: &str = "startsWith";
/// Key of the substring strategy.
pub const CONTAINS_KEY: &str = "contains";

/// A successful match of a term against a token.
///
/// Immutable once built. Equality and hashing cover all three fields, so two
/// results carrying the same key, term and token are interchangeable no matter
/// which strategy instance produced them, while the same term and token under
/// different keys stay distinct.
///
/// The stored term is always lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MatchResult {
    key: Cow<'static, str>,
    term: String,
    matched_token: Token,
}

impl MatchResult {
    /// Result of the exact-equality strategy.
    pub fn equals(term: &str, token: &Token) -> Self {
        Self::build(Cow::Borrowed(EQUALS_KEY), term, token)
    }

    /// Result of the substring strategy.
    pub fn contains(term: &str, token: &Token) -> Self {
        Self::build(Cow::Borrowed(CONTAINS_KEY), term, token)
    }

    /// Result of the prefix strategy.
    pub fn starts_with(term: &str, token: &Token) -> Self {
        Self::build(Cow::Borrowed(STARTS_WITH_KEY), term, token)
    }

    /// Result for an arbitrary strategy key.
    ///
    /// The key is the provenance of the result and must not be empty.
    pub fn of(
        key: impl Into<Cow<'static, str>>,
        term: &str,
        token: &Token,
    ) -> Result<Self, MatchError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(MatchError::EmptyKey);
        }
        Ok(Self::build(key, term, token))
    }

    fn build(key: Cow<'static, str>, term: &str, token: &Token) -> Self {
        Self {
            key,
            term: fold_case(term),
            matched_token: token.clone(),
        }
    }

    /// Key of the strategy that produced this result.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The lower-cased term (or partial term) that matched.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn matched_token(&self) -> &Token {
        &self.matched_token
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}) -> {}", self.key, self.term, self.matched_token)
    }
}

/// Errors produced by the matching layer.
///
/// A term that does not match is never an error; strategies report it as an
/// empty result list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid matcher configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// A strategy or result was given an empty key.
    #[error("matcher key must not be empty")]
    EmptyKey,
    /// A strategy with the same key is already registered.
    #[error("matcher key already registered: {0}")]
    DuplicateKey(String),
}
