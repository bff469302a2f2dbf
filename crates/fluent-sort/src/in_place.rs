//! The mutable builder.
//!
//! [`InPlaceSort`] aliases the caller's slice. Rule-adding calls mutate the
//! wrapper and return it, and [`InPlaceSort::execute_sort`] reorders the
//! caller's data directly. Nothing is copied.

use std::fmt;

use crate::builder::{unconfigured, SortBuilder};
use crate::comparator::{Comparator, Dir};
use crate::error::{Result, SortError};
use crate::executor::sort_in_place;
use crate::rules::RuleSet;

/// A mutable sort builder over a borrowed slice.
///
/// The wrapper holds an exclusive borrow of the caller's data for its whole
/// lifetime, so the data cannot change between configuring and executing.
///
/// # Example
///
/// ```
/// use fluent_sort::{wrap_in_place, Dir, SortBuilder};
///
/// let mut scores = vec![(2, 'b'), (1, 'z'), (2, 'a')];
///
/// let mut sorter = wrap_in_place(&mut scores);
/// sorter
///     .sort_by(|s: &(i32, char)| s.0, Dir::Desc)
///     .then_by(|s: &(i32, char)| s.1, Dir::Asc)?;
/// sorter.execute_sort()?;
///
/// assert_eq!(scores, vec![(2, 'a'), (2, 'b'), (1, 'z')]);
/// # Ok::<(), fluent_sort::SortError>(())
/// ```
pub struct InPlaceSort<'a, T> {
    data: &'a mut [T],
    rules: Option<RuleSet<T>>,
}

/// Wraps a slice for in-place sorting, without copying it.
pub fn wrap_in_place<T>(data: &mut [T]) -> InPlaceSort<'_, T> {
    InPlaceSort { data, rules: None }
}

impl<'a, T> InPlaceSort<'a, T> {
    /// Returns the wrapped data in its current order.
    pub fn as_slice(&self) -> &[T] {
        &*self.data
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

    /// Releases the borrow of the caller's data.
    pub fn into_inner(self) -> &'a mut [T] {
        self.data
    }
}

impl<T: 'static> InPlaceSort<'_, T> {
    /// Sorts the wrapped data in place and returns it.
    ///
    /// Can be called any number of times. Fails with
    /// [`SortError::EmptyRuleSet`] if no rules are configured; the data is
    /// left untouched in that case.
    pub fn execute_sort(&mut self) -> Result<&mut [T]> {
        let rules = self.rules.as_ref().ok_or(SortError::EmptyRuleSet)?;
        sort_in_place(&mut *self.data, rules)?;
        Ok(&mut *self.data)
    }
}

impl<'a, 'b, T: 'static> SortBuilder for &'b mut InPlaceSort<'a, T> {
    type Item = T;
    type Output = &'b mut InPlaceSort<'a, T>;

    fn replace_rules(self, rules: RuleSet<T>) -> Self::Output {
        self.rules = Some(rules);
        self
    }

    fn append_rule(self, rule: Comparator<T>, dir: Dir) -> Result<Self::Output> {
        let rules = self.rules.as_mut().ok_or_else(unconfigured)?;
        rules.push_with_dir(rule, dir);
        Ok(self)
    }
}

impl<T> fmt::Debug for InPlaceSort<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InPlaceSort")
            .field("len", &self.data.len())
            .field("rules", &self.rules)
            .finish()
    }
}
