use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use canonical::{fold_case, tokenize_item, TokenizeConfig};

use crate::metrics::{set_match_metrics, MatchMetrics};
use crate::types::{CONTAINS_KEY, EQUALS_KEY, STARTS_WITH_KEY};

fn item(text: &str) -> TokenizedItem<&'static str> {
    tokenize_item("doc", text, &TokenizeConfig::default()).expect("tokenize")
}

fn token_of(item: &TokenizedItem<&'static str>, text: &str) -> Token {
    item.tokens
        .iter()
        .find(|t| t.text == text)
        .cloned()
        .expect("token present")
}

/// Reports every occurrence of a fixed needle inside a token.
struct Occurrences;

impl StrategyInfo for Occurrences {
    fn key(&self) -> &str {
        "occurrences"
    }

    fn priority(&self) -> i32 {
        1200
    }
}

impl<T> MatcherStrategy<T> for Occurrences {
    fn apply(
        &self,
        _ctx: &SearchContext<'_, T>,
        _item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult> {
        let term = fold_case(term);
        if term.is_empty() {
            return Vec::new();
        }
        fold_case(&token.text)
            .match_indices(term.as_str())
            .filter_map(|(idx, _)| {
                MatchResult::of(format!("occurrences@{idx}"), &term, token).ok()
            })
            .collect()
    }
}

struct Named(&'static str, i32);

impl StrategyInfo for Named {
    fn key(&self) -> &str {
        self.0
    }

    fn priority(&self) -> i32 {
        self.1
    }
}

impl<T> MatcherStrategy<T> for Named {
    fn apply(
        &self,
        _ctx: &SearchContext<'_, T>,
        _item: &TokenizedItem<T>,
        _term: &str,
        _token: &Token,
    ) -> Vec<MatchResult> {
        Vec::new()
    }
}

#[test]
fn builtin_set_is_priority_ordered() {
    let set: MatcherSet<()> = MatcherSet::builtin();
    assert_eq!(set.keys(), vec![EQUALS_KEY, STARTS_WITH_KEY, CONTAINS_KEY]);
    let priorities: Vec<i32> = set.iter().map(|s| s.priority()).collect();
    assert_eq!(priorities, vec![800, 900, 1100]);
}

#[test]
fn prefix_term_yields_two_distinct_results() {
    let doc = item("Catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("ca", items);
    let set = MatcherSet::builtin();

    let token = token_of(&doc, "Catalog");
    let results = set.match_token(&ctx, &doc, "ca", &token);
    assert_eq!(
        results,
        vec![
            MatchResult::starts_with("ca", &token),
            MatchResult::contains("ca", &token),
        ]
    );
    assert_ne!(results[0], results[1]);
}

#[test]
fn single_char_term_only_matches_prefix() {
    let doc = item("catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("c", items);
    let set = MatcherSet::builtin();

    let results = set.match_item(&ctx, &doc, "c");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key(), STARTS_WITH_KEY);
    assert_eq!(results[0].term(), "c");
}

#[test]
fn exact_term_matches_all_three() {
    let doc = item("Catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("CATALOG", items);
    let set = MatcherSet::builtin();

    let keys: Vec<String> = set
        .match_item(&ctx, &doc, "CATALOG")
        .iter()
        .map(|r| r.key().to_string())
        .collect();
    assert_eq!(keys, vec![EQUALS_KEY, STARTS_WITH_KEY, CONTAINS_KEY]);
}

#[test]
fn match_item_walks_every_token() {
    let doc = item("cart catalog scatter");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("cat", items);
    let set = MatcherSet::builtin();

    let results = set.match_item(&ctx, &doc, "cat");
    let summary: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.key(), r.matched_token().text.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (STARTS_WITH_KEY, "catalog"),
            (CONTAINS_KEY, "catalog"),
            (CONTAINS_KEY, "scatter"),
        ]
    );
}

#[test]
fn empty_term_skipped_by_default() {
    let doc = item("catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("", items);
    let set = MatcherSet::builtin();
    assert!(set.match_item(&ctx, &doc, "").is_empty());
}

#[test]
fn empty_term_reaches_strategies_when_not_skipped() {
    let doc = item("catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("", items);
    let set = MatcherSet::builtin().with_skip_empty_terms(false);

    let results = set.match_item(&ctx, &doc, "");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].key(), STARTS_WITH_KEY);
}

#[test]
fn register_rejects_duplicate_and_empty_keys() {
    let mut set: MatcherSet<()> = MatcherSet::builtin();
    assert_eq!(
        set.register(Equals),
        Err(MatchError::DuplicateKey(EQUALS_KEY.to_string()))
    );
    assert_eq!(set.register(Named("", 10)), Err(MatchError::EmptyKey));
    assert_eq!(set.len(), 3);
}

#[test]
fn register_keeps_ties_in_insertion_order() {
    let mut set: MatcherSet<()> = MatcherSet::new();
    set.register(Named("late", 2000)).expect("register");
    set.register(Named("first-tie", 900)).expect("register");
    set.register(StartsWith).expect("register");
    set.register(Named("second-tie", 900)).expect("register");
    set.register(Named("early", 100)).expect("register");

    assert_eq!(
        set.keys(),
        vec!["early", "first-tie", STARTS_WITH_KEY, "second-tie", "late"]
    );
}

#[test]
fn custom_strategy_can_emit_several_results() {
    let doc = item("banana");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("an", items);
    let mut set = MatcherSet::new();
    set.register(Occurrences).expect("register");

    let keys: Vec<String> = set
        .match_item(&ctx, &doc, "an")
        .iter()
        .map(|r| r.key().to_string())
        .collect();
    assert_eq!(keys, vec!["occurrences@1", "occurrences@3"]);
}

#[test]
fn exclude_removes_by_key() {
    let mut set: MatcherSet<()> = MatcherSet::builtin();
    assert!(set.exclude(CONTAINS_KEY));
    assert!(!set.exclude(CONTAINS_KEY));
    assert!(!set.contains_key(CONTAINS_KEY));
    assert_eq!(set.keys(), vec![EQUALS_KEY, STARTS_WITH_KEY]);
}

#[test]
fn from_config_applies_exclusions_and_min_chars() {
    let cfg = MatcherConfig {
        exclude: vec![EQUALS_KEY.into(), "no-such-matcher".into()],
        contains_min_chars: 4,
        ..MatcherConfig::default()
    };
    let set = MatcherSet::from_config(&cfg).expect("valid config");
    assert_eq!(set.keys(), vec![STARTS_WITH_KEY, CONTAINS_KEY]);

    let doc = item("catalog");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("tal", items);
    assert!(set.match_item(&ctx, &doc, "tal").is_empty());
    assert_eq!(set.match_item(&ctx, &doc, "talo").len(), 1);
}

#[test]
fn from_config_rejects_invalid_config() {
    let cfg = MatcherConfig {
        contains_min_chars: 0,
        ..MatcherConfig::default()
    };
    assert!(matches!(
        MatcherSet::<()>::from_config(&cfg),
        Err(MatchError::InvalidConfig(_))
    ));
}

#[test]
fn debug_lists_keys() {
    let set: MatcherSet<()> = MatcherSet::builtin();
    let rendered = format!("{set:?}");
    assert!(rendered.contains("startsWith"));
    assert!(rendered.contains("skip_empty_terms: true"));
}

#[derive(Default)]
struct RecordingMetrics {
    calls: Mutex<Vec<(usize, usize, usize)>>,
}

impl MatchMetrics for RecordingMetrics {
    fn record_match(
        &self,
        term_chars: usize,
        token_count: usize,
        _latency: Duration,
        hit_count: usize,
    ) {
        self.calls
            .lock()
            .expect("metrics lock")
            .push((term_chars, token_count, hit_count));
    }
}

#[test]
fn match_item_reports_metrics() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_match_metrics(Some(recorder.clone()));

    // A term unique to this test so records from parallel tests are ignorable.
    let doc = item("zyzzyva zymurgy");
    let items = std::slice::from_ref(&doc);
    let ctx = SearchContext::new("zyzzy", items);
    let set = MatcherSet::builtin();
    let results = set.match_item(&ctx, &doc, "zyzzy");

    set_match_metrics(None);

    assert_eq!(results.len(), 2);
    let calls = recorder.calls.lock().expect("metrics lock");
    assert!(calls.contains(&(5, 2, 2)));
}
