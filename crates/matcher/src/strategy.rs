//! The matcher strategy abstraction.
//!
//! A strategy is a named predicate over `(term, token)` that produces zero or
//! more [`MatchResult`]s. Strategies are ordered by [`StrategyInfo::priority`]:
//! lower values are more significant and are evaluated first.
//!
//! Key and priority live on [`StrategyInfo`], which does not depend on the item
//! type, so [`by_priority`] works over built-ins, trait objects and custom
//! strategies alike.

use std::cmp::Ordering;

use canonical::{Token, TokenizedItem};

use crate::types::MatchResult;

/// Baseline priority. Concrete strategies shift from here.
pub const DEFAULT_PRIORITY: i32 = 1000;

/// Identity and ordering shared by every strategy.
pub trait StrategyInfo: Send + Sync {
    /// Stable, non-empty key, unique per concrete strategy.
    fn key(&self) -> &str;

    /// Lower values win first.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }
}

/// A term matching strategy over items of type `T`.
///
/// `apply` must be a pure function of its arguments: no interior state, no
/// mutation of the context, item or token. A non-match is an empty vector.
pub trait MatcherStrategy<T>: StrategyInfo {
    fn apply(
        &self,
        ctx: &SearchContext<'_, T>,
        item: &TokenizedItem<T>,
        term: &str,
        token: &Token,
    ) -> Vec<MatchResult>;
}

/// Orders two strategies by priority alone.
///
/// Equal priorities compare equal, so a stable sort keeps registration order
/// for ties.
pub fn by_priority<A, B>(a: &A, b: &B) -> Ordering
where
    A: StrategyInfo + ?Sized,
    B: StrategyInfo + ?Sized,
{
    a.priority().cmp(&b.priority())
}

/// Handle to the search in progress, passed through to every strategy.
///
/// None of the built-in strategies read it; it exists so custom strategies can
/// look at the full query or the candidate set.
#[derive(Debug)]
pub struct SearchContext<'a, T> {
    query: &'a str,
    items: &'a [TokenizedItem<T>],
}

// Manual impls: the derives would demand `T: Clone`.
impl<T> Clone for SearchContext<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SearchContext<'_, T> {}

impl<'a, T> SearchContext<'a, T> {
    pub fn new(query: &'a str, items: &'a [TokenizedItem<T>]) -> Self {
        Self { query, items }
    }

    /// The full query string the current term was taken from.
    pub fn query(&self) -> &'a str {
        self.query
    }

    /// Every item under consideration for this search.
    pub fn items(&self) -> &'a [TokenizedItem<T>] {
        self.items
    }
}
