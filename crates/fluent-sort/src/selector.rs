//! Selector adapter.
//!
//! A [`Selector`] names the key a rule sorts on, either as a key extraction
//! function or as a [`FieldPath`]. [`selector_to_comparator`] turns it into a
//! [`Comparator`] that orders elements by the natural order of their keys.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use crate::comparator::Comparator;
use crate::error::Result;
use crate::path::{FieldPath, Sortable};

type KeyCompare<T> = Rc<dyn Fn(&T, &T) -> Option<Ordering>>;

/// The key a sort rule is based on.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use fluent_sort::{selector_to_comparator, Selector};
/// use serde_json::json;
///
/// let by_path = selector_to_comparator(Selector::path("stats.level")?);
/// let by_key = selector_to_comparator(Selector::key(|v: &serde_json::Value| v["id"].as_i64()));
///
/// let a = json!({"id": 1, "stats": {"level": 7}});
/// let b = json!({"id": 2, "stats": {"level": 3}});
/// assert_eq!(by_path.compare(&a, &b), Ordering::Greater);
/// assert_eq!(by_key.compare(&a, &b), Ordering::Less);
/// # Ok::<(), fluent_sort::SortError>(())
/// ```
pub enum Selector<T> {
    /// Resolve the key through a dotted path.
    Path(FieldPath),
    /// Extract the key with a function. Holds the extracted keys' comparison.
    Key(KeyCompare<T>),
}

impl<T> Selector<T> {
    /// Creates a selector from a key extraction function.
    pub fn key<K, F>(key: F) -> Self
    where
        F: Fn(&T) -> K + 'static,
        K: PartialOrd,
    {
        Selector::Key(Rc::new(move |left: &T, right: &T| {
            key(left).partial_cmp(&key(right))
        }))
    }

    /// Creates a selector from a path expression such as `"stats.agility"`.
    ///
    /// Fails with [`SortError::InvalidArgument`](crate::SortError) if the
    /// expression has no field names in it.
    pub fn path(expr: &str) -> Result<Self> {
        FieldPath::parse(expr).map(Selector::Path)
    }

    /// Returns `true` if this selector resolves a path.
    pub fn is_path(&self) -> bool {
        matches!(self, Selector::Path(_))
    }
}

impl<T> Clone for Selector<T> {
    fn clone(&self) -> Self {
        match self {
            Selector::Path(path) => Selector::Path(path.clone()),
            Selector::Key(key) => Selector::Key(Rc::clone(key)),
        }
    }
}

impl<T> fmt::Debug for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Selector::Key(_) => f.write_str("Key(..)"),
        }
    }
}

impl<T> From<FieldPath> for Selector<T> {
    fn from(path: FieldPath) -> Self {
        Selector::Path(path)
    }
}

/// Converts a selector into an ascending comparator.
///
/// Keys are compared with their natural order. Keys that have no order
/// relative to each other compare `Equal`: two absent keys, an absent key
/// against a present one, NaN, or keys of different kinds (a string against
/// a number). There is no special NaN or null policy beyond that.
pub fn selector_to_comparator<T: Sortable + 'static>(selector: Selector<T>) -> Comparator<T> {
    match selector {
        Selector::Path(path) => Comparator::new(move |left: &T, right: &T| {
            path.resolve(left)
                .partial_cmp(&path.resolve(right))
                .unwrap_or(Ordering::Equal)
        }),
        Selector::Key(key) => key_comparator(key),
    }
}

pub(crate) fn key_comparator<T: 'static>(key: KeyCompare<T>) -> Comparator<T> {
    Comparator::new(move |left: &T, right: &T| key(left, right).unwrap_or(Ordering::Equal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as Json};

    fn manual(a: f64, b: f64) -> Ordering {
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[test]
    fn key_selector_matches_manual_comparison() {
        let cmp = selector_to_comparator(Selector::key(|v: &Json| v["f"].as_f64()));
        let samples = [json!({"f": 1.0}), json!({"f": 2.5}), json!({"f": 1.0})];

        for a in &samples {
            for b in &samples {
                let expected = manual(a["f"].as_f64().unwrap(), b["f"].as_f64().unwrap());
                assert_eq!(cmp.compare(a, b), expected);
            }
        }
    }

    #[test]
    fn path_selector_orders_nested_values() {
        let cmp = selector_to_comparator(Selector::path("a.b").unwrap());
        assert_eq!(
            cmp.compare(&json!({"a": {"b": 1}}), &json!({"a": {"b": 2}})),
            Ordering::Less
        );
    }

    #[test]
    fn absent_path_key_ties() {
        let cmp = selector_to_comparator(Selector::path("a.b").unwrap());
        let present = json!({"a": {"b": 3}});
        let absent = json!({"a": null});

        assert_eq!(cmp.compare(&present, &absent), Ordering::Equal);
        assert_eq!(cmp.compare(&absent, &present), Ordering::Equal);
        assert_eq!(cmp.compare(&absent, &absent), Ordering::Equal);
    }

    #[test]
    fn mismatched_kinds_tie() {
        let cmp = selector_to_comparator(Selector::path("v").unwrap());
        assert_eq!(
            cmp.compare(&json!({"v": "10"}), &json!({"v": 2})),
            Ordering::Equal
        );
    }

    #[test]
    fn invalid_path_is_rejected() {
        assert!(Selector::<Json>::path("..").is_err());
        assert!(Selector::<Json>::path("x").unwrap().is_path());
    }

    #[test]
    fn cloned_key_selectors_share_one_extractor() {
        let selector = Selector::key(|v: &Json| v["rank"].as_i64());
        let first = key_comparator(match selector.clone() {
            Selector::Key(key) => key,
            Selector::Path(_) => unreachable!(),
        });
        let second = selector_to_comparator(selector);

        let low = json!({"rank": 1});
        let high = json!({"rank": 9});
        assert_eq!(first.compare(&low, &high), Ordering::Less);
        assert_eq!(second.compare(&high, &low), Ordering::Greater);
        assert_eq!(first.compare(&low, &json!({})), Ordering::Equal);
    }

    #[test]
    fn selector_debug() {
        let path: Selector<Json> = Selector::path("a.b").unwrap();
        assert!(format!("{path:?}").starts_with("Path("));
        let key: Selector<Json> = Selector::key(|v: &Json| v.is_null());
        assert_eq!(format!("{key:?}"), "Key(..)");
    }
}
