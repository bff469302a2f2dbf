//! The persistent builder.
//!
//! [`FluentSort`] never changes once built. Every rule-adding call returns a
//! new wrapper holding a shallow copy of the elements and an extended (or
//! replaced) rule set, so earlier wrappers stay valid and can be sorted again
//! with their own rules.
//!
//! Data is held as a [`Cow`]: [`wrap`] takes ownership of a copy, while
//! [`wrap_borrowed`] shares the caller's slice. Either way the wrapper's own
//! element order is never changed; [`FluentSort::sorted_result`] sorts a copy.

use std::borrow::Cow;
use std::fmt;

use crate::builder::{unconfigured, SortBuilder};
use crate::comparator::{Comparator, Dir};
use crate::error::{Result, SortError};
use crate::executor::sorted_copy;
use crate::rules::RuleSet;

/// A persistent sort builder.
///
/// # Example
///
/// ```
/// use fluent_sort::{wrap, SortBuilder};
/// use serde_json::json;
///
/// let people = wrap(vec![
///     json!({"name": "Ada", "age": 36}),
///     json!({"name": "Bob", "age": 25}),
///     json!({"name": "Cy", "age": 36}),
/// ]);
///
/// let by_age = people.sort_by_path_descending("age")?;
/// let by_age_then_name = by_age.then_by_path_ascending("name")?;
///
/// let names: Vec<_> = by_age_then_name
///     .sorted_result()?
///     .into_iter()
///     .map(|p| p["name"].as_str().unwrap_or_default().to_string())
///     .collect();
/// assert_eq!(names, ["Ada", "Cy", "Bob"]);
///
/// // The original wrapper is untouched and still unconfigured.
/// assert!(!people.is_configured());
/// assert_eq!(people.as_slice()[1]["name"], "Bob");
/// # Ok::<(), fluent_sort::SortError>(())
/// ```
pub struct FluentSort<'a, T: Clone> {
    data: Cow<'a, [T]>,
    rules: Option<RuleSet<T>>,
}

/// Wraps a collection, taking an owned copy of its elements.
///
/// Accepts anything convertible into a `Vec`, including `&[T]` (which clones
/// the elements).
pub fn wrap<'a, T: Clone>(items: impl Into<Vec<T>>) -> FluentSort<'a, T> {
    FluentSort {
        data: Cow::Owned(items.into()),
        rules: None,
    }
}

/// Wraps a slice without copying it.
///
/// The wrapper and every wrapper derived from it share the borrowed slice;
/// none of them ever writes to it.
pub fn wrap_borrowed<T: Clone>(items: &[T]) -> FluentSort<'_, T> {
    FluentSort {
        data: Cow::Borrowed(items),
        rules: None,
    }
}

impl<'a, T: Clone> FluentSort<'a, T> {
    /// Returns the wrapped elements in their original order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the configured rules, if a `sort_*` call has been made.
    pub fn rules(&self) -> Option<&RuleSet<T>> {
        self.rules.as_ref()
    }

    /// Returns `true` once a `sort_*` call has been made.
    pub fn is_configured(&self) -> bool {
        self.rules.is_some()
    }

    /// Returns `true` if the elements are shared with the caller rather than
    /// owned by this wrapper.
    pub fn is_borrowed(&self) -> bool {
        matches!(self.data, Cow::Borrowed(_))
    }

    /// Consumes the wrapper, returning its elements in their original order.
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_owned()
    }

    fn derive(&self, rules: RuleSet<T>) -> Self {
        FluentSort {
            data: self.data.clone(),
            rules: Some(rules),
        }
    }
}

impl<T: Clone + 'static> FluentSort<'_, T> {
    /// Returns a sorted copy of the elements.
    ///
    /// The wrapper keeps its original order, so this can be called any
    /// number of times. Fails with [`SortError::EmptyRuleSet`] if no rules
    /// are configured.
    pub fn sorted_result(&self) -> Result<Vec<T>> {
        let rules = self.rules.as_ref().ok_or(SortError::EmptyRuleSet)?;
        sorted_copy(&self.data, rules)
    }
}

impl<'a, T: Clone + 'static> SortBuilder for &FluentSort<'a, T> {
    type Item = T;
    type Output = FluentSort<'a, T>;

    fn replace_rules(self, rules: RuleSet<T>) -> Self::Output {
        self.derive(rules)
    }

    fn append_rule(self, rule: Comparator<T>, dir: Dir) -> Result<Self::Output> {
        let mut rules = self.rules.clone().ok_or_else(unconfigured)?;
        rules.push_with_dir(rule, dir);
        Ok(self.derive(rules))
    }
}

impl<T: Clone> Clone for FluentSort<'_, T> {
    fn clone(&self) -> Self {
        FluentSort {
            data: self.data.clone(),
            rules: self.rules.clone(),
        }
    }
}

impl<T: Clone> fmt::Debug for FluentSort<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentSort")
            .field("len", &self.data.len())
            .field("borrowed", &self.is_borrowed())
            .field("rules", &self.rules)
            .finish()
    }
}
