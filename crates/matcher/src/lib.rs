//! # fulltext term matchers (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the term-matching stage of the full-text search. Given a
//! search term and a token taken from an indexed item, it decides whether the
//! token satisfies the term under one or more strategies and, if so, produces
//! a [`MatchResult`]. Tokenization lives in `canonical`; iterating items,
//! ranking and merging results belong to the caller.
//!
//! ## Core Types
//!
//! - [`MatcherStrategy`]: a named, prioritized predicate over `(term, token)`.
//!   Key and priority come from [`StrategyInfo`]; [`by_priority`] orders any
//!   two strategies, lower priority first.
//! - Built-ins, all case-insensitive on a lower-cased term:
//!   - [`Equals`] (`equals`, 800) — token equals the term.
//!   - [`StartsWith`] (`startsWith`, 900) — token starts with the term.
//!   - [`Contains`] (`contains`, 1100) — token contains a term of at least two
//!     characters.
//! - [`MatchResult`]: immutable `(key, term, token)` with structural equality.
//! - [`MatcherSet`]: strategies kept in priority order, applied per token or per
//!   item.
//! - [`MatcherConfig`]: exclusions and tuning for a set built from the built-ins.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::{tokenize_item, TokenizeConfig};
//! use matcher::{MatcherSet, SearchContext};
//!
//! let item = tokenize_item("doc-1", "Rust catalog", &TokenizeConfig::default()).unwrap();
//! let items = std::slice::from_ref(&item);
//! let ctx = SearchContext::new("ca", items);
//!
//! let set = MatcherSet::builtin();
//! let results = set.match_item(&ctx, &item, "ca");
//!
//! let keys: Vec<&str> = results.iter().map(|r| r.key()).collect();
//! assert_eq!(keys, vec!["startsWith", "contains"]);
//! ```
//!
//! ## Empty terms
//!
//! Each strategy follows plain string semantics, so `startsWith` on an empty
//! term matches every token. [`MatcherSet`] drops empty terms before any
//! strategy runs unless built with `with_skip_empty_terms(false)`.
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to record
//! per-item latency and hit counts. Structured `tracing` events are emitted at
//! `debug` and `trace` level.

pub mod builtin;
pub mod config;
pub mod metrics;
pub mod set;
pub mod strategy;
pub mod types;

pub use crate::builtin::{Contains, Equals, StartsWith, DEFAULT_CONTAINS_MIN_CHARS};
pub use crate::config::MatcherConfig;
pub use crate::metrics::{set_match_metrics, MatchMetrics};
pub use crate::set::MatcherSet;
pub use crate::strategy::{
    by_priority, MatcherStrategy, SearchContext, StrategyInfo, DEFAULT_PRIORITY,
};
pub use crate::types::{MatchError, MatchResult, CONTAINS_KEY, EQUALS_KEY, STARTS_WITH_KEY};
