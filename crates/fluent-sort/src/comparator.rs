//! Comparator primitives.
//!
//! A [`Comparator`] is a shared, reference-counted comparison function. The
//! free functions [`negate`] and [`compose_sort`] build new comparators out of
//! existing ones; they are the only combinators the builders need.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SortError};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    #[serde(alias = "ascending")]
    Asc,
    /// Descending order (largest first).
    #[serde(alias = "descending")]
    Desc,
}

impl Dir {
    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dir {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Dir::Asc),
            "desc" | "descending" => Ok(Dir::Desc),
            other => Err(SortError::invalid(format!(
                "unknown sort direction '{other}'"
            ))),
        }
    }
}

/// A two-argument comparison function.
///
/// Comparators are cheap to clone: clones share the same underlying function.
/// The function must be consistent (antisymmetric and transitive) for a sort
/// result to be well defined; this is not checked.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use fluent_sort::Comparator;
///
/// let by_len = Comparator::by_key(|s: &&str| s.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// assert_eq!(by_len.reversed().compare(&"ab", &"abc"), Ordering::Greater);
/// ```
pub struct Comparator<T> {
    func: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T> Comparator<T> {
    /// Wraps a comparison function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        Comparator {
            func: Rc::new(func),
        }
    }

    /// Builds a comparator from a key extraction function.
    ///
    /// Keys are compared with [`PartialOrd`]; keys with no defined order
    /// (NaN, for instance) compare equal.
    pub fn by_key<K, F>(key: F) -> Self
    where
        F: Fn(&T) -> K + 'static,
        K: PartialOrd,
    {
        Comparator::new(move |left, right| {
            key(left)
                .partial_cmp(&key(right))
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Compares two elements.
    pub fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.func)(left, right)
    }

    /// Returns the negation of this comparator.
    pub fn reversed(&self) -> Self
    where
        T: 'static,
    {
        negate(self)
    }

    /// Returns this comparator adjusted for `dir`.
    pub fn with_dir(self, dir: Dir) -> Self
    where
        T: 'static,
    {
        match dir {
            Dir::Asc => self,
            Dir::Desc => negate(&self),
        }
    }

    /// Returns a comparator that falls back to `next` when this one ties.
    pub fn then(&self, next: &Comparator<T>) -> Self
    where
        T: 'static,
    {
        let first = self.clone();
        let next = next.clone();
        Comparator::new(move |left, right| {
            first
                .compare(left, right)
                .then_with(|| next.compare(left, right))
        })
    }

    /// Returns the comparator as a closure for `slice::sort_by`.
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |left: &T, right: &T| self.compare(left, right)
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Comparator {
            func: Rc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}

/// Returns a comparator whose result is the reverse of `comparator`.
///
/// `negate(&negate(&c))` orders every pair exactly like `c`.
pub fn negate<T: 'static>(comparator: &Comparator<T>) -> Comparator<T> {
    let inner = comparator.clone();
    Comparator::new(move |left, right| inner.compare(left, right).reverse())
}

/// Composes an ordered list of comparators into one.
///
/// The result evaluates `comparators` in order and returns the first
/// non-`Equal` ordering, or `Equal` if every comparator ties.
///
/// Composing zero comparators is an error rather than an "always equal"
/// comparator, since it almost always means a `sort_by` call was forgotten.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use fluent_sort::{compose_sort, Comparator, SortError};
///
/// let rules = vec![
///     Comparator::by_key(|p: &(i32, i32)| p.0),
///     Comparator::by_key(|p: &(i32, i32)| p.1),
/// ];
/// let composed = compose_sort(&rules)?;
/// assert_eq!(composed.compare(&(1, 9), &(1, 2)), Ordering::Greater);
///
/// let none: Vec<Comparator<(i32, i32)>> = Vec::new();
/// assert_eq!(compose_sort(&none).unwrap_err(), SortError::EmptyRuleSet);
/// # Ok::<(), SortError>(())
/// ```
pub fn compose_sort<T: 'static>(comparators: &[Comparator<T>]) -> Result<Comparator<T>> {
    if comparators.is_empty() {
        return Err(SortError::EmptyRuleSet);
    }

    let rules: Rc<[Comparator<T>]> = comparators.into();
    Ok(Comparator::new(move |left, right| {
        for rule in rules.iter() {
            let ordering = rule.compare(left, right);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }))
}
