//! Built-in strategies: exact equality, prefix, and substring containment.
//!
//! | Strategy     | key          | priority | matches when                           |
//! |--------------|--------------|----------|----------------------------------------|
//! | [`Equals`]     | `equals`     | 800      | token equals term                      |
//! | [`StartsWith`] | `startsWith` | 900      | token starts with term                 |
//! | [`Contains`]   | `contains`   | 1100     | term has > 1 char and token contains it |
//!
//! All three fold the term with [`fold_case`] before testing and produce at
//! most one result.

use canonical::{fold_case, Token, TokenizedItem};

use crate::strategy::{MatcherStrategy, SearchContext, StrategyInfo, DEFAULT_PRIORITY};
use crate::types::{MatchResult, CONTAINS_KEY, EQUALS_KEY, STARTS_WITH_KEY};

/// Shortest term, in characters, that [`Contains`] accepts by default.
pub const DEFAULT_CONTAINS_MIN_CHARS: usize = 2;

/// Token equals the term, ignoring case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equals;

impl StrategyInfo for Equals {
    fn key(&self) -> &str {
        EQUALS_KEY
    }

    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY - 200
    }
}

impl<T> MatcherStrategy<T> for Equals {
    fn apply(
        &self,
        _ctx: &SearchContext<'_, T>,
        _item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult> {
        let term = fold_case(term);
        if token.eq_ignore_case(&term) {
            vec![MatchResult::equals(&term, token)]
        } else {
            Vec::new()
        }
    }
}

/// Token starts with the term, ignoring case.
///
/// An empty term is a prefix of every token. [`MatcherSet`](crate::MatcherSet)
/// filters empty terms out before any strategy runs unless configured otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartsWith;

impl StrategyInfo for StartsWith {
    fn key(&self) -> &str {
        STARTS_WITH_KEY
    }

    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY - 100
    }
}

impl<T> MatcherStrategy<T> for StartsWith {
    fn apply(
        &self,
        _ctx: &SearchContext<'_, T>,
        _item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult> {
        let term = fold_case(term);
        if token.starts_with_ignore_case(&term) {
            vec![MatchResult::starts_with(&term, token)]
        } else {
            Vec::new()
        }
    }
}

/// Token contains the term, ignoring case.
///
/// Terms shorter than `min_chars` characters never match: single-character
/// containment hits nearly every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contains {
    min_chars: usize,
}

impl Contains {
    /// A substring strategy with a custom minimum term length.
    ///
    /// `min_chars` below 1 is raised to 1.
    pub fn with_min_chars(min_chars: usize) -> Self {
        Self {
            min_chars: min_chars.max(1),
        }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for Contains {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_CONTAINS_MIN_CHARS,
        }
    }
}

impl StrategyInfo for Contains {
    fn key(&self) -> &str {
        CONTAINS_KEY
    }

    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY + 100
    }
}

impl<T> MatcherStrategy<T> for Contains {
    fn apply(
        &self,
        _ctx: &SearchContext<'_, T>,
        _item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult> {
        // Length of the term as typed; folding can expand a character.
        if term.chars().count() < self.min_chars {
            return Vec::new();
        }
        let term = fold_case(term);
        if token.contains_ignore_case(&term) {
            vec![MatchResult::contains(&term, token)]
        } else {
            Vec::new()
        }
    }
}
