//! Call-time selections.

use bato_classes::ClassValue;
use indexmap::IndexMap;

use crate::value::VariantValue;

/// The selections and ad-hoc classes passed to a single resolver call.
///
/// Axes that are not set fall back to the configuration's defaults. Keys the
/// configuration does not declare are ignored.
///
/// # Example
///
/// ```rust
/// use bato::Props;
///
/// let props = Props::new()
///     .set("size", "large")
///     .set("disabled", true)
///     .class("mt-2");
/// assert!(props.contains("size"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    pub(crate) values: IndexMap<String, VariantValue>,
    pub(crate) class: ClassValue,
    pub(crate) class_name: ClassValue,
}

impl Props {
    /// Creates props with no selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `value` on `axis`.
    pub fn set(mut self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.values.insert(axis.to_string(), value.into());
        self
    }

    /// Appends ad-hoc classes under the `class` spelling.
    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class = classes.into();
        self
    }

    /// Appends ad-hoc classes under the `className` spelling.
    ///
    /// When both spellings are given, `class` is emitted first.
    pub fn class_name(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class_name = classes.into();
        self
    }

    /// Returns the value selected for `axis`, if passed.
    pub fn get(&self, axis: &str) -> Option<&VariantValue> {
        self.values.get(axis)
    }

    /// Returns `true` if `axis` was passed.
    pub fn contains(&self, axis: &str) -> bool {
        self.values.contains_key(axis)
    }

    /// Returns a copy with the same selections and no ad-hoc classes.
    pub fn without_classes(&self) -> Self {
        Self {
            values: self.values.clone(),
            ..Self::default()
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Props
where
    K: Into<String>,
    V: Into<VariantValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(axis, value)| (axis.into(), value.into()))
                .collect(),
            ..Self::default()
        }
    }
}
