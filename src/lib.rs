//! Workspace umbrella crate for the fulltext term-matching stage.
//!
//! This crate stitches together the tokenizer (`canonical`) and the term
//! matchers (`matcher`) so callers can depend on a single crate, and adds YAML
//! configuration loading for both.
//!
//! ```
//! use fulltext::{FullTextConfig, SearchContext, tokenize_item};
//!
//! let cfg = FullTextConfig::from_yaml("matcher:\n  exclude: [contains]\n").unwrap();
//! let set = cfg.matcher_set().unwrap();
//!
//! let item = tokenize_item(42u64, "Catalog of things", &cfg.tokenize).unwrap();
//! let items = std::slice::from_ref(&item);
//! let ctx = SearchContext::new("cat", items);
//!
//! let results = set.match_item(&ctx, &item, "cat");
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].key(), "startsWith");
//! ```

pub mod config;

pub use canonical::{
    Token, TokenizeConfig, TokenizeError, TokenizedItem, fold_case, tokenize, tokenize_item,
};
pub use matcher::{
    CONTAINS_KEY, Contains, DEFAULT_CONTAINS_MIN_CHARS, DEFAULT_PRIORITY, EQUALS_KEY, Equals,
    MatchError, MatchMetrics, MatchResult, MatcherConfig, MatcherSet, MatcherStrategy,
    STARTS_WITH_KEY, SearchContext, StartsWith, StrategyInfo, by_priority, set_match_metrics,
};

pub use crate::config::{ConfigLoadError, FullTextConfig};
