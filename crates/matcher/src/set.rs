use std::cmp::Ordering;
use std::fmt;
use std::time::Instant;

use canonical::{Token, TokenizedItem};
use tracing::{debug, trace, warn};

use crate::builtin::{Contains, Equals, StartsWith};
use crate::config::MatcherConfig;
use crate::metrics::metrics_recorder;
use crate::strategy::{by_priority, MatcherStrategy, SearchContext, StrategyInfo};
use crate::types::{MatchError, MatchResult};

#[cfg(test)]
mod tests;

/// An ordered collection of matcher strategies.
///
/// Strategies are kept sorted by priority; strategies that share a priority
/// keep the order they were registered in. Keys are unique within a set.
///
/// The set holds no per-search state, so a single instance can be shared
/// behind an `Arc` by any number of concurrent searches.
pub struct MatcherSet<T> {
    strategies: Vec<Box<dyn MatcherStrategy<T>>>,
    skip_empty_terms: bool,
}

impl<T> MatcherSet<T> {
    /// An empty set that skips empty terms.
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
            skip_empty_terms: MatcherConfig::default_skip_empty_terms(),
        }
    }

    /// The three built-in strategies with default settings.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.push_sorted(Box::new(Equals));
        set.push_sorted(Box::new(StartsWith));
        set.push_sorted(Box::new(Contains::default()));
        set
    }

    /// Built-in strategies shaped by `cfg`.
    ///
    /// Excluded keys that do not name a built-in are ignored with a warning.
    pub fn from_config(cfg: &MatcherConfig) -> Result<Self, MatchError> {
        if let Err(err) = cfg.validate() {
            warn!(error = %err, "matcher_config_rejected");
            return Err(err);
        }

        let mut set = Self::new().with_skip_empty_terms(cfg.skip_empty_terms);
        set.push_sorted(Box::new(Equals));
        set.push_sorted(Box::new(StartsWith));
        set.push_sorted(Box::new(Contains::with_min_chars(cfg.contains_min_chars)));

        for key in &cfg.exclude {
            if !set.exclude(key) {
                warn!(key = %key, "matcher_exclude_unknown_key");
            }
        }
        Ok(set)
    }

    /// Whether an empty term short-circuits to no results.
    pub fn with_skip_empty_terms(mut self, skip: bool) -> Self {
        self.skip_empty_terms = skip;
        self
    }

    /// Add a strategy in priority order.
    pub fn register<S>(&mut self, strategy: S) -> Result<(), MatchError>
    where
        S: MatcherStrategy<T> + 'static,
    {
        let key = strategy.key();
        if key.trim().is_empty() {
            return Err(MatchError::EmptyKey);
        }
        if self.contains_key(key) {
            return Err(MatchError::DuplicateKey(key.to_string()));
        }
        debug!(key = %key, priority = strategy.priority(), "matcher_registered");
        self.push_sorted(Box::new(strategy));
        Ok(())
    }

    /// Remove the strategy with `key`. Returns whether one was removed.
    pub fn exclude(&mut self, key: &str) -> bool {
        let before = self.strategies.len();
        self.strategies.retain(|s| s.key() != key);
        let removed = self.strategies.len() != before;
        if removed {
            debug!(key = %key, "matcher_excluded");
        }
        removed
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.strategies.iter().any(|s| s.key() == key)
    }

    /// Strategy keys in priority order.
    pub fn keys(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategies in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn MatcherStrategy<T>> + '_ {
        self.strategies.iter().map(|s| s.as_ref())
    }

    /// Apply every strategy, in priority order, to one token.
    ///
    /// Results are concatenated in strategy order; a token can therefore yield
    /// several results with different keys.
    pub fn match_token(
        &self,
        ctx: &SearchContext<'_, T>,
        item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult> {
        if self.skip_empty_terms && term.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for strategy in &self.strategies {
            let hits = strategy.apply(ctx, item, term, token);
            if !hits.is_empty() {
                trace!(
                    key = %strategy.key(),
                    token = %token.text,
                    hits = hits.len(),
                    "matcher_hit"
                );
                results.extend(hits);
            }
        }
        results
    }

    /// Apply every strategy to every token of `item`.
    pub fn match_item(
        &self,
        ctx: &SearchContext<'_, T>,
        item: &TokenizedItem<T>,
        term: &str,
    ) -> Vec<MatchResult> {
        let start = Instant::now();

        let results: Vec<MatchResult> = item
            .tokens()
            .iter()
            .flat_map(|token| self.match_token(ctx, item, term, token))
            .collect();

        let elapsed = start.elapsed();
        let term_chars = term.chars().count();
        debug!(
            term_chars,
            token_count = item.tokens().len(),
            hit_count = results.len(),
            elapsed_micros = elapsed.as_micros(),
            "match_item"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(term_chars, item.tokens().len(), elapsed, results.len());
        }

        results
    }

    fn push_sorted(&mut self, strategy: Box<dyn MatcherStrategy<T>>) {
        // Insert after every strategy of equal priority to keep ties stable.
        let idx = self
            .strategies
            .partition_point(|s| by_priority(s.as_ref(), strategy.as_ref()) != Ordering::Greater);
        self.strategies.insert(idx, strategy);
    }
}

impl<T> Default for MatcherSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for MatcherSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherSet")
            .field("keys", &self.keys())
            .field("skip_empty_terms", &self.skip_empty_terms)
            .finish()
    }
}
