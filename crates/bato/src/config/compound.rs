//! Compound variant rules.

use bato_classes::ClassValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::VariantValue;

/// The requirement a compound rule places on one axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    /// The axis must be selected with one of these values.
    ///
    /// Only explicitly passed props are compared; axis defaults never
    /// satisfy a one-of condition.
    OneOf(Vec<VariantValue>),
    /// The effective axis value (prop, else default) must equal this value.
    Is(VariantValue),
}

/// A conjunctive rule adding classes when every listed axis condition holds.
///
/// # Example
///
/// ```rust
/// use bato::CompoundVariant;
///
/// let rule = CompoundVariant::new()
///     .when("intent", "warning")
///     .when("disabled", true)
///     .class("button--warning-disabled");
/// ```
///
/// In JSON or YAML a rule is a flat object: every key other than `class` and
/// `className` is an axis condition.
///
/// ```json
/// { "intent": ["warning", "danger"], "size": "medium", "class": "uppercase" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundVariant {
    #[serde(flatten)]
    pub(crate) conditions: IndexMap<String, Condition>,
    #[serde(default, skip_serializing_if = "ClassValue::is_null")]
    pub(crate) class: ClassValue,
    #[serde(
        default,
        rename = "className",
        skip_serializing_if = "ClassValue::is_null"
    )]
    pub(crate) class_name: ClassValue,
}

impl CompoundVariant {
    /// Creates a rule with no conditions and no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `axis` to resolve to exactly `value`.
    pub fn when(mut self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.conditions
            .insert(axis.to_string(), Condition::Is(value.into()));
        self
    }

    /// Requires `axis` to be passed with any of `values`.
    pub fn when_any<I, V>(mut self, axis: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        let accepted = values.into_iter().map(Into::into).collect();
        self.conditions
            .insert(axis.to_string(), Condition::OneOf(accepted));
        self
    }

    /// Sets the classes contributed under the `class` spelling.
    pub fn class(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class = classes.into();
        self
    }

    /// Sets the classes contributed under the `className` spelling.
    pub fn class_name(mut self, classes: impl Into<ClassValue>) -> Self {
        self.class_name = classes.into();
        self
    }

    /// Iterates over the axis conditions in declaration order.
    pub fn conditions(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.conditions.iter().map(|(axis, c)| (axis.as_str(), c))
    }
}
