//! Class-token values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A class-token contribution.
///
/// Values nest arbitrarily: a list may hold strings, toggles, other lists,
/// and so on. Only "truthy" leaves produce tokens when flattened:
///
/// | Variant | Contributes |
/// |---------|-------------|
/// | `Null` | nothing |
/// | `Bool(_)` | nothing |
/// | `Int(0)` | nothing |
/// | `Int(n)` | `n` as text |
/// | `Str(s)` | every whitespace-separated token of `s` |
/// | `List(items)` | each item, in order |
/// | `Map(entries)` | each key whose flag is `Some(true)` |
///
/// The serde representation is untagged, so JSON such as
/// `["btn", {"active": true, "hidden": null}]` deserializes directly.
///
/// # Example
///
/// ```rust
/// use bato_classes::{classes, flatten, ClassValue};
///
/// let value = classes!["btn", Some("btn--primary"), None::<&str>, vec!["rounded"]];
/// assert_eq!(flatten([value]), "btn btn--primary rounded");
///
/// let toggles = ClassValue::toggles([("active", true), ("hidden", false)]);
/// assert_eq!(flatten([toggles]), "active");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<ClassValue>),
    Map(IndexMap<String, Option<bool>>),
}

impl ClassValue {
    /// Builds a keyed toggle map; keys flagged `true` become tokens.
    pub fn toggles<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        ClassValue::Map(
            entries
                .into_iter()
                .map(|(name, on)| (name.into(), Some(on)))
                .collect(),
        )
    }

    /// Returns `true` for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, ClassValue::Null)
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Str(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Str(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Str(value.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        ClassValue::Int(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        ClassValue::Int(value.into())
    }
}

impl From<u32> for ClassValue {
    fn from(value: u32) -> Self {
        ClassValue::Int(value.into())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}
