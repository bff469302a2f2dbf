//! Dotted-path field access.
//!
//! A [`FieldPath`] is parsed from strings like `"stats.agility"` or
//! `"tags[0].name"` and resolved against any type implementing [`Sortable`].
//! Resolution never fails: a missing link anywhere along the path produces
//! [`Value::None`].

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, SortError};
use crate::value::{Number, Value};

/// Result of looking up one path segment on a [`Sortable`] record.
pub enum Field<'a> {
    /// A leaf value usable as a sort key.
    Value(Value<'a>),
    /// A nested record; further segments are looked up on it.
    Nested(&'a dyn Sortable),
    /// The segment does not exist.
    Missing,
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Field::Nested(_) => f.write_str("Nested(..)"),
            Field::Missing => f.write_str("Missing"),
        }
    }
}

/// Trait for records whose fields can be addressed by name.
///
/// # Manual Implementation
///
/// ```
/// use fluent_sort::{Field, FieldPath, Sortable, Value};
///
/// struct Stats {
///     agility: f64,
/// }
///
/// struct Monster {
///     name: String,
///     stats: Stats,
/// }
///
/// impl Sortable for Stats {
///     fn sort_field(&self, name: &str) -> Field<'_> {
///         match name {
///             "agility" => Field::Value(self.agility.into()),
///             _ => Field::Missing,
///         }
///     }
/// }
///
/// impl Sortable for Monster {
///     fn sort_field(&self, name: &str) -> Field<'_> {
///         match name {
///             "name" => Field::Value(Value::String(&self.name)),
///             "stats" => Field::Nested(&self.stats),
///             _ => Field::Missing,
///         }
///     }
/// }
///
/// let monster = Monster { name: "Slow".into(), stats: Stats { agility: 3.0 } };
/// let path: FieldPath = "stats.agility".parse()?;
/// assert_eq!(path.resolve(&monster), Value::from(3.0f64));
/// assert!(FieldPath::parse("stats.strength")?.resolve(&monster).is_none());
/// # Ok::<(), fluent_sort::SortError>(())
/// ```
pub trait Sortable {
    /// Looks up a single named field.
    ///
    /// Return [`Field::Missing`] for names the type does not know.
    fn sort_field(&self, name: &str) -> Field<'_>;
}

impl<S: Sortable + ?Sized> Sortable for &S {
    fn sort_field(&self, name: &str) -> Field<'_> {
        (**self).sort_field(name)
    }
}

impl<S: Sortable + ?Sized> Sortable for Box<S> {
    fn sort_field(&self, name: &str) -> Field<'_> {
        (**self).sort_field(name)
    }
}

impl Sortable for serde_json::Value {
    fn sort_field(&self, name: &str) -> Field<'_> {
        let child = match self {
            serde_json::Value::Object(map) => map.get(name),
            serde_json::Value::Array(items) => {
                name.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => None,
        };
        child.map_or(Field::Missing, json_field)
    }
}

impl Sortable for serde_json::Map<String, serde_json::Value> {
    fn sort_field(&self, name: &str) -> Field<'_> {
        self.get(name).map_or(Field::Missing, json_field)
    }
}

fn json_field(value: &serde_json::Value) -> Field<'_> {
    match value {
        serde_json::Value::Null => Field::Value(Value::None),
        serde_json::Value::Bool(b) => Field::Value(Value::Bool(*b)),
        serde_json::Value::String(s) => Field::Value(Value::String(s)),
        serde_json::Value::Number(n) => Field::Value(json_number(n)),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Field::Nested(value),
    }
}

fn json_number(n: &serde_json::Number) -> Value<'static> {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::I64(i))
    } else if let Some(u) = n.as_u64() {
        Value::Number(Number::U64(u))
    } else {
        n.as_f64().map_or(Value::None, |f| Value::Number(Number::F64(f)))
    }
}

static SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("segment pattern should compile"));

/// A parsed path expression: a non-empty sequence of field names.
///
/// Parsing keeps every run of word characters (`[A-Za-z0-9_]`) and drops
/// everything else, so `"a.b"`, `"a[b]"` and `"a -> b"` are the same path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parses a path expression.
    ///
    /// Fails with [`SortError::InvalidArgument`] if the expression contains
    /// no field names.
    pub fn parse(expr: &str) -> Result<Self> {
        let segments: Vec<String> = SEGMENT
            .find_iter(expr)
            .map(|m| m.as_str().to_string())
            .collect();

        if segments.is_empty() {
            return Err(SortError::invalid(format!(
                "selector must be function or path string, got {expr:?}"
            )));
        }

        log::trace!("parsed field path {expr:?} into {segments:?}");
        Ok(FieldPath { segments })
    }

    /// Returns the field names, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves the path against a record.
    ///
    /// A missing segment, a leaf reached before the last segment, or a nested
    /// record at the end of the path all yield [`Value::None`].
    pub fn resolve<'a, S: Sortable>(&self, record: &'a S) -> Value<'a> {
        let mut current: Field<'a> = Field::Nested(record);
        for segment in &self.segments {
            current = match current {
                Field::Nested(inner) => inner.sort_field(segment),
                Field::Value(_) | Field::Missing => return Value::None,
            };
        }

        match current {
            Field::Value(value) => value,
            Field::Nested(_) | Field::Missing => Value::None,
        }
    }
}

impl FromStr for FieldPath {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self> {
        FieldPath::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}
