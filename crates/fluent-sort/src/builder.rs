//! The shared fluent builder interface.
//!
//! [`SortBuilder`] is implemented by both wrapper lifecycles:
//!
//! - `&mut InPlaceSort`: every call mutates the wrapper's rule set and hands
//!   back the same `&mut InPlaceSort`.
//! - `&FluentSort`: every call returns a new `FluentSort`, leaving the wrapper
//!   it was called on untouched.
//!
//! Implementors only provide [`replace_rules`](SortBuilder::replace_rules) and
//! [`append_rule`](SortBuilder::append_rule); everything else is built on top.
//!
//! # Method families
//!
//! | Starts a new order         | Adds a tie-break            | Rule source          |
//! |----------------------------|-----------------------------|----------------------|
//! | `sort_comparing`           | `then_comparing`            | comparator, as given |
//! | `sort_by` (+ `_ascending`, `_descending`) | `then_by` (+ ...) | key function   |
//! | `sort_by_path` (+ ...)     | `then_by_path` (+ ...)      | dotted path          |
//! | `sort_by_selector`         | `then_by_selector`          | [`Selector`]         |
//! | `sort_by_keys`             |                             | [`SortKey`] list     |
//!
//! `sort_*` calls discard every earlier rule. `then_*` calls fail with
//! [`SortError::CorruptState`] until a `sort_*` call has initialized the rule
//! set.

use crate::comparator::{Comparator, Dir};
use crate::error::{Result, SortError};
use crate::path::Sortable;
use crate::rules::{rules_from_keys, RuleSet, SortKey};
use crate::selector::{selector_to_comparator, Selector};

/// Fluent rule configuration shared by [`InPlaceSort`](crate::InPlaceSort)
/// and [`FluentSort`](crate::FluentSort).
pub trait SortBuilder: Sized {
    /// Element type being sorted.
    type Item: 'static;

    /// What each rule-adding call hands back.
    type Output;

    /// Replaces the whole rule set.
    fn replace_rules(self, rules: RuleSet<Self::Item>) -> Self::Output;

    /// Appends a tie-break rule, negated when `dir` is descending.
    ///
    /// Fails with [`SortError::CorruptState`] if the rule set was never
    /// initialized.
    fn append_rule(self, rule: Comparator<Self::Item>, dir: Dir) -> Result<Self::Output>;

    // ========================================================================
    // Initial rule
    // ========================================================================

    /// Starts a new order with a raw comparator.
    fn sort_comparing(self, comparator: Comparator<Self::Item>) -> Self::Output {
        self.replace_rules(RuleSet::single(comparator))
    }

    /// Starts a new order on a key, in the given direction.
    fn sort_by<K, F>(self, key: F, dir: Dir) -> Self::Output
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        let mut rules = RuleSet::new();
        rules.push_with_dir(Comparator::by_key(key), dir);
        self.replace_rules(rules)
    }

    /// Starts a new ascending order on a key.
    fn sort_by_ascending<K, F>(self, key: F) -> Self::Output
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        self.sort_by(key, Dir::Asc)
    }

    /// Starts a new descending order on a key.
    fn sort_by_descending<K, F>(self, key: F) -> Self::Output
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        self.sort_by(key, Dir::Desc)
    }

    /// Starts a new order on a selector.
    fn sort_by_selector(self, selector: Selector<Self::Item>, dir: Dir) -> Self::Output
    where
        Self::Item: Sortable,
    {
        let mut rules = RuleSet::new();
        rules.push_with_dir(selector_to_comparator(selector), dir);
        self.replace_rules(rules)
    }

    /// Starts a new order on a dotted path such as `"stats.agility"`.
    ///
    /// Fails with [`SortError::InvalidArgument`] if the path has no field
    /// names; the builder is left unchanged.
    fn sort_by_path(self, path: &str, dir: Dir) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        let selector = Selector::path(path)?;
        Ok(self.sort_by_selector(selector, dir))
    }

    /// Starts a new ascending order on a dotted path.
    fn sort_by_path_ascending(self, path: &str) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        self.sort_by_path(path, Dir::Asc)
    }

    /// Starts a new descending order on a dotted path.
    fn sort_by_path_descending(self, path: &str) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        self.sort_by_path(path, Dir::Desc)
    }

    /// Starts a new order from a list of keys, highest priority first.
    ///
    /// Fails with [`SortError::EmptyRuleSet`] if `keys` is empty.
    fn sort_by_keys(self, keys: &[SortKey]) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        let rules = rules_from_keys(keys)?;
        Ok(self.replace_rules(rules))
    }

    // ========================================================================
    // Tie-break rules
    // ========================================================================

    /// Adds a raw comparator as the next tie-break.
    fn then_comparing(self, comparator: Comparator<Self::Item>) -> Result<Self::Output> {
        self.append_rule(comparator, Dir::Asc)
    }

    /// Adds a key as the next tie-break, in the given direction.
    fn then_by<K, F>(self, key: F, dir: Dir) -> Result<Self::Output>
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        self.append_rule(Comparator::by_key(key), dir)
    }

    /// Adds an ascending key as the next tie-break.
    fn then_by_ascending<K, F>(self, key: F) -> Result<Self::Output>
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        self.then_by(key, Dir::Asc)
    }

    /// Adds a descending key as the next tie-break.
    fn then_by_descending<K, F>(self, key: F) -> Result<Self::Output>
    where
        F: Fn(&Self::Item) -> K + 'static,
        K: PartialOrd,
    {
        self.then_by(key, Dir::Desc)
    }

    /// Adds a selector as the next tie-break.
    fn then_by_selector(self, selector: Selector<Self::Item>, dir: Dir) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        self.append_rule(selector_to_comparator(selector), dir)
    }

    /// Adds a dotted path as the next tie-break.
    fn then_by_path(self, path: &str, dir: Dir) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        let selector = Selector::path(path)?;
        self.then_by_selector(selector, dir)
    }

    /// Adds an ascending dotted path as the next tie-break.
    fn then_by_path_ascending(self, path: &str) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        self.then_by_path(path, Dir::Asc)
    }

    /// Adds a descending dotted path as the next tie-break.
    fn then_by_path_descending(self, path: &str) -> Result<Self::Output>
    where
        Self::Item: Sortable,
    {
        self.then_by_path(path, Dir::Desc)
    }
}

pub(crate) fn unconfigured() -> SortError {
    SortError::corrupt("rule set is not initialized; start the order with a sort_* call")
}
