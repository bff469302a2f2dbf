//! Fluent Sort - Multi-key sorting with composable comparators.
//!
//! Fluent Sort turns an ordered list of sort rules into one comparator and
//! applies it to a collection. It supports:
//!
//! - Rules from raw comparators, key functions, or dotted field paths
//! - Ascending and descending rules, mixed freely
//! - Tie-breaking: later rules only decide between elements earlier rules
//!   consider equal
//! - Two builder lifecycles: sort the caller's slice in place, or build
//!   immutable wrappers that return sorted copies
//!
//! # Quick Start
//!
//! ```rust
//! use fluent_sort::{wrap, Dir, SortBuilder};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Monster {
//!     id: u32,
//!     intelligence: f64,
//!     agility: f64,
//! }
//!
//! let monsters = vec![
//!     Monster { id: 0, intelligence: 8.0, agility: 5.0 },
//!     Monster { id: 1, intelligence: 5.0, agility: 10.0 },
//!     Monster { id: 2, intelligence: 8.0, agility: 7.5 },
//! ];
//!
//! let sorted = wrap(monsters)
//!     .sort_by(|m: &Monster| m.intelligence, Dir::Asc)
//!     .then_by(|m: &Monster| m.agility, Dir::Asc)?
//!     .sorted_result()?;
//!
//! let ids: Vec<u32> = sorted.iter().map(|m| m.id).collect();
//! assert_eq!(ids, [1, 0, 2]);
//! # Ok::<(), fluent_sort::SortError>(())
//! ```
//!
//! # Builder Lifecycles
//!
//! | Entry point        | Wrapper       | Rule calls return     | Executor                 | Caller's data |
//! |--------------------|---------------|-----------------------|--------------------------|---------------|
//! | [`wrap_in_place`]  | [`InPlaceSort`] | the same `&mut` wrapper | [`InPlaceSort::execute_sort`] | sorted in place |
//! | [`wrap`]           | [`FluentSort`]  | a new wrapper          | [`FluentSort::sorted_result`] | copied, never touched |
//! | [`wrap_borrowed`]  | [`FluentSort`]  | a new wrapper          | [`FluentSort::sorted_result`] | shared, never touched |
//!
//! Both implement [`SortBuilder`], so the rule methods are the same.
//!
//! # Rule Semantics
//!
//! ```text
//! compare(a, b) = first non-Equal of [rule_0(a, b), rule_1(a, b), ...], else Equal
//! ```
//!
//! - `sort_*` calls replace every rule with a single new one
//! - `then_*` calls append a tie-break rule (and fail before any `sort_*`)
//! - Executing with no rules fails with [`SortError::EmptyRuleSet`]
//! - Sorting is stable: elements equal under every rule keep their order
//!
//! # Path Selectors
//!
//! Paths like `"stats.agility"` or `"tags[0]"` are resolved through the
//! [`Sortable`] trait, implemented for `serde_json::Value` and easy to
//! implement for your own types. A path that runs into a missing field yields
//! an absent key, and absent keys tie with everything.

mod builder;
mod comparator;
mod error;
mod executor;
mod in_place;
mod path;
mod persistent;
mod rules;
mod selector;
mod value;

// Re-export public API
pub use builder::SortBuilder;
pub use comparator::{compose_sort, negate, Comparator, Dir};
pub use error::{Result, SortError};
pub use executor::{sort_in_place, sorted_copy};
pub use in_place::{wrap_in_place, InPlaceSort};
pub use path::{Field, FieldPath, Sortable};
pub use persistent::{wrap, wrap_borrowed, FluentSort};
pub use rules::{rules_from_keys, RuleSet, SortKey};
pub use selector::{selector_to_comparator, Selector};
pub use value::{compare_natural, Number, Value};
