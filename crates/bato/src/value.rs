//! Variant axis values.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The reserved value that selects nothing on an axis.
pub const UNSET: &str = "unset";

/// A value selected on a variant axis.
///
/// Axis value maps are keyed by text, so every value has one canonical
/// [`key`](Self::key): `true` becomes `"true"`, `0` becomes `"0"`. Equality,
/// on the other hand, is strict: `Bool(false)` and `Str("false")` select the
/// same class payload but are different values when compound rules compare
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl VariantValue {
    /// Returns the text used to look this value up in an axis value map.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            VariantValue::Str(s) => Cow::Borrowed(s),
            VariantValue::Int(n) => Cow::Owned(n.to_string()),
            VariantValue::Bool(true) => Cow::Borrowed("true"),
            VariantValue::Bool(false) => Cow::Borrowed("false"),
        }
    }

    /// Returns `true` for the reserved [`UNSET`] value.
    pub fn is_unset(&self) -> bool {
        matches!(self, VariantValue::Str(s) if s == UNSET)
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        VariantValue::Str(value.to_string())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        VariantValue::Str(value)
    }
}

impl From<&String> for VariantValue {
    fn from(value: &String) -> Self {
        VariantValue::Str(value.clone())
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        VariantValue::Bool(value)
    }
}

impl From<i64> for VariantValue {
    fn from(value: i64) -> Self {
        VariantValue::Int(value)
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        VariantValue::Int(value.into())
    }
}

impl From<u32> for VariantValue {
    fn from(value: u32) -> Self {
        VariantValue::Int(value.into())
    }
}
