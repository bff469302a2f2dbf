//! Rule accumulation.
//!
//! A [`RuleSet`] is the ordered list of comparators a builder collects before
//! a sort runs. Index 0 has the highest priority; later rules only break ties.
//!
//! [`SortKey`] is the data form of a path rule, for sort orders that come from
//! configuration or user input rather than code.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::comparator::{compose_sort, negate, Comparator, Dir};
use crate::error::{Result, SortError};
use crate::path::{FieldPath, Sortable};
use crate::selector::{selector_to_comparator, Selector};

/// An ordered sequence of sort rules.
pub struct RuleSet<T> {
    rules: Vec<Comparator<T>>,
}

impl<T> RuleSet<T> {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        RuleSet { rules: Vec::new() }
    }

    /// Creates a rule set holding one rule.
    pub fn single(rule: Comparator<T>) -> Self {
        RuleSet { rules: vec![rule] }
    }

    /// Appends a rule with the lowest priority so far.
    pub fn push(&mut self, rule: Comparator<T>) {
        self.rules.push(rule);
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Comparator<T>> {
        self.rules.iter()
    }

    /// Returns the rules in priority order.
    pub fn as_slice(&self) -> &[Comparator<T>] {
        &self.rules
    }
}

impl<T: 'static> RuleSet<T> {
    /// Appends a rule, negated when `dir` is descending.
    pub fn push_with_dir(&mut self, rule: Comparator<T>, dir: Dir) {
        self.push(rule);
        if dir.is_desc() {
            self.negate_last();
        }
    }

    /// Negates the most recently added rule.
    ///
    /// Returns `false` (and does nothing) if the set is empty.
    pub fn negate_last(&mut self) -> bool {
        match self.rules.last_mut() {
            Some(last) => {
                *last = negate(last);
                true
            }
            None => false,
        }
    }

    /// Composes all rules into one comparator.
    ///
    /// Fails with [`SortError::EmptyRuleSet`] if there are no rules.
    pub fn compose(&self) -> Result<Comparator<T>> {
        compose_sort(&self.rules)
    }
}

impl<T> Default for RuleSet<T> {
    fn default() -> Self {
        RuleSet::new()
    }
}

impl<T> Clone for RuleSet<T> {
    fn clone(&self) -> Self {
        RuleSet {
            rules: self.rules.clone(),
        }
    }
}

impl<T> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("len", &self.rules.len())
            .finish()
    }
}

impl<T> FromIterator<Comparator<T>> for RuleSet<T> {
    fn from_iter<I: IntoIterator<Item = Comparator<T>>>(iter: I) -> Self {
        RuleSet {
            rules: iter.into_iter().collect(),
        }
    }
}

/// A path rule expressed as data: a field path plus a direction.
///
/// Parses from `"path"`, `"path:asc"`, `"path:desc"` or `"-path"` (descending),
/// and (de)serializes as `{"path": "...", "dir": "asc" | "desc"}`.
///
/// # Example
///
/// ```
/// use fluent_sort::{Dir, SortKey};
///
/// let key: SortKey = "-stats.agility".parse()?;
/// assert_eq!(key.path.to_string(), "stats.agility");
/// assert_eq!(key.dir, Dir::Desc);
/// assert_eq!(key.to_string(), "stats.agility:desc");
/// # Ok::<(), fluent_sort::SortError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSortKey", into = "RawSortKey")]
pub struct SortKey {
    /// The field to sort by.
    pub path: FieldPath,
    /// The sort direction.
    pub dir: Dir,
}

impl SortKey {
    /// Creates a key from a path expression and direction.
    pub fn new(path: &str, dir: Dir) -> Result<Self> {
        Ok(SortKey {
            path: FieldPath::parse(path)?,
            dir,
        })
    }

    /// Creates an ascending key.
    pub fn asc(path: &str) -> Result<Self> {
        SortKey::new(path, Dir::Asc)
    }

    /// Creates a descending key.
    pub fn desc(path: &str) -> Result<Self> {
        SortKey::new(path, Dir::Desc)
    }

    /// Builds the comparator for this key.
    pub fn to_comparator<T: Sortable + 'static>(&self) -> Comparator<T> {
        selector_to_comparator(Selector::Path(self.path.clone())).with_dir(self.dir)
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('-') {
            if rest.contains(':') {
                return Err(SortError::invalid(format!(
                    "sort key {s:?} has both a '-' prefix and a direction suffix"
                )));
            }
            return SortKey::desc(rest);
        }
        match s.rsplit_once(':') {
            Some((path, dir)) => SortKey::new(path, dir.parse()?),
            None => SortKey::asc(s),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.dir)
    }
}

#[derive(Serialize, Deserialize)]
struct RawSortKey {
    path: String,
    #[serde(default)]
    dir: Dir,
}

impl TryFrom<RawSortKey> for SortKey {
    type Error = SortError;

    fn try_from(raw: RawSortKey) -> Result<Self> {
        SortKey::new(&raw.path, raw.dir)
    }
}

impl From<SortKey> for RawSortKey {
    fn from(key: SortKey) -> Self {
        RawSortKey {
            path: key.path.to_string(),
            dir: key.dir,
        }
    }
}

/// Builds a rule set from a list of keys, in order.
///
/// Fails with [`SortError::EmptyRuleSet`] if `keys` is empty.
pub fn rules_from_keys<T: Sortable + 'static>(keys: &[SortKey]) -> Result<RuleSet<T>> {
    if keys.is_empty() {
        return Err(SortError::EmptyRuleSet);
    }
    Ok(keys.iter().map(SortKey::to_comparator).collect())
}
