//! The variant configuration model.

use bato_classes::ClassValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use super::compound::CompoundVariant;
use super::error::ConfigError;
use crate::value::VariantValue;

/// Class payloads for each value of one axis, keyed by [`VariantValue::key`].
pub type AxisValues = IndexMap<String, ClassValue>;

/// Directed conflicts: axis → value key → other axis → conflicting value keys.
pub type Incompatibilities = IndexMap<String, IndexMap<String, IndexMap<String, Vec<String>>>>;

/// A static description of a component's classes.
///
/// A configuration combines:
///
/// - `base` classes that are always present
/// - `variants`: named axes, each mapping its values to class payloads
/// - `compoundVariants`: extra classes for combinations of axis values
/// - `defaultVariants`: values used when a call does not select an axis
/// - `incompatible`: value pairs that must never be selected together
///
/// Axes and values keep their declaration order, which is also the order
/// their classes are emitted in.
///
/// Nothing is validated at construction; unknown references simply never
/// match. Call [`validate`](Self::validate) for early detection of authoring
/// mistakes.
///
/// # Example
///
/// ```rust
/// use bato::{CompoundVariant, VariantConfig};
///
/// let config = VariantConfig::new()
///     .base("btn")
///     .variant("size", [("small", "s"), ("large", "l")])
///     .variant("color", [("red", "r"), ("blue", "b")])
///     .compound(
///         CompoundVariant::new()
///             .when("size", "large")
///             .when("color", "red")
///             .class("big-red"),
///     )
///     .default_variant("size", "small")
///     .incompatible("size", "large", "color", ["blue"]);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantConfig {
    #[serde(skip_serializing_if = "ClassValue::is_null")]
    pub(crate) base: ClassValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) variants: Option<IndexMap<String, AxisValues>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) compound_variants: Option<Vec<CompoundVariant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) default_variants: Option<IndexMap<String, VariantValue>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_incompatible"
    )]
    pub(crate) incompatible: Option<Incompatibilities>,
}

/// Reads conflict lists as typed values and stores them under their keys,
/// so `[0]`, `[true]` and `["0"]` load alike.
fn deserialize_incompatible<'de, D>(deserializer: D) -> Result<Option<Incompatibilities>, D::Error>
where
    D: Deserializer<'de>,
{
    type Typed = IndexMap<String, IndexMap<String, IndexMap<String, Vec<VariantValue>>>>;

    let typed: Option<Typed> = Option::deserialize(deserializer)?;
    Ok(typed.map(|rules| {
        rules
            .into_iter()
            .map(|(axis, by_value)| {
                let by_value = by_value
                    .into_iter()
                    .map(|(value, conflicts)| {
                        let conflicts = conflicts
                            .into_iter()
                            .map(|(other_axis, forbidden)| {
                                let keys = forbidden
                                    .iter()
                                    .map(|v| v.key().into_owned())
                                    .collect();
                                (other_axis, keys)
                            })
                            .collect();
                        (value, conflicts)
                    })
                    .collect();
                (axis, by_value)
            })
            .collect()
    }))
}

impl VariantConfig {
    /// Creates an empty configuration, which resolves to the ad-hoc classes only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Sets the classes that are always emitted first.
    pub fn base(mut self, classes: impl Into<ClassValue>) -> Self {
        self.base = classes.into();
        self
    }

    /// Declares (or replaces) an axis with its value payloads.
    ///
    /// Value names may be strings, integers, or booleans; they are stored
    /// under their [`VariantValue::key`].
    pub fn variant<I, K, V>(mut self, axis: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<VariantValue>,
        V: Into<ClassValue>,
    {
        let values: AxisValues = values
            .into_iter()
            .map(|(name, classes)| {
                let name: VariantValue = name.into();
                (name.key().into_owned(), classes.into())
            })
            .collect();
        self.variants
            .get_or_insert_with(IndexMap::new)
            .insert(axis.to_string(), values);
        self
    }

    /// Marks the configuration as variant-aware even without any axis.
    ///
    /// An empty `variants` section still selects the full resolution path,
    /// where defaults and compound rules are honored.
    pub fn declare_variants(mut self) -> Self {
        self.variants.get_or_insert_with(IndexMap::new);
        self
    }

    /// Appends a compound rule; rules are evaluated in the order added.
    pub fn compound(mut self, rule: CompoundVariant) -> Self {
        self.compound_variants
            .get_or_insert_with(Vec::new)
            .push(rule);
        self
    }

    /// Sets the value used for `axis` when a call does not select it.
    pub fn default_variant(mut self, axis: &str, value: impl Into<VariantValue>) -> Self {
        self.default_variants
            .get_or_insert_with(IndexMap::new)
            .insert(axis.to_string(), value.into());
        self
    }

    /// Declares that selecting `axis: value` forbids any of `conflicts` on `other_axis`.
    ///
    /// The relation is directed: the reverse direction must be declared
    /// separately if wanted.
    pub fn incompatible<I, V>(
        mut self,
        axis: &str,
        value: impl Into<VariantValue>,
        other_axis: &str,
        conflicts: I,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VariantValue>,
    {
        let value: VariantValue = value.into();
        let forbidden = self
            .incompatible
            .get_or_insert_with(IndexMap::new)
            .entry(axis.to_string())
            .or_default()
            .entry(value.key().into_owned())
            .or_default()
            .entry(other_axis.to_string())
            .or_default();
        for conflict in conflicts {
            let conflict: VariantValue = conflict.into();
            let key = conflict.key().into_owned();
            if !forbidden.contains(&key) {
                forbidden.push(key);
            }
        }
        self
    }

    /// Returns `true` if a `variants` section is present, even if empty.
    pub fn has_variants(&self) -> bool {
        self.variants.is_some()
    }

    /// Iterates over declared axis names in declaration order.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .flat_map(|variants| variants.keys().map(String::as_str))
    }

    /// Returns the default value configured for `axis`.
    pub fn default_for(&self, axis: &str) -> Option<&VariantValue> {
        self.default_variants.as_ref()?.get(axis)
    }

    /// Returns the class payload declared for `axis: value`.
    pub fn classes_for(&self, axis: &str, value: &VariantValue) -> Option<&ClassValue> {
        self.variants.as_ref()?.get(axis)?.get(value.key().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_stringifies_value_names() {
        let config = VariantConfig::new()
            .variant("m", [(0, "m-0"), (1, "m-1")])
            .variant("disabled", [(true, "off"), (false, "on")]);

        assert_eq!(
            config.classes_for("m", &VariantValue::from("0")),
            Some(&ClassValue::from("m-0"))
        );
        assert_eq!(
            config.classes_for("disabled", &VariantValue::from(true)),
            Some(&ClassValue::from("off"))
        );
    }

    #[test]
    fn test_axis_order_is_declaration_order() {
        let config = VariantConfig::new()
            .variant("size", [("sm", "s")])
            .variant("color", [("red", "r")])
            .variant("align", [("left", "l")]);

        let axes: Vec<&str> = config.axis_names().collect();
        assert_eq!(axes, vec!["size", "color", "align"]);
    }

    #[test]
    fn test_declare_variants() {
        let config = VariantConfig::new();
        assert!(!config.has_variants());
        let config = config.declare_variants();
        assert!(config.has_variants());
        assert_eq!(config.axis_names().count(), 0);
    }

    #[test]
    fn test_incompatible_merges_entries() {
        let config = VariantConfig::new()
            .incompatible("size", "large", "color", ["red"])
            .incompatible("size", "large", "color", ["red", "blue"])
            .incompatible("size", "large", "shape", ["round"]);

        let rules = config.incompatible.as_ref().unwrap();
        let large = &rules["size"]["large"];
        assert_eq!(large["color"], vec!["red", "blue"]);
        assert_eq!(large["shape"], vec!["round"]);
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = VariantConfig::from_json(
            r#"{
                "base": ["box", "box-border"],
                "variants": {
                    "margin": { "0": "m-0", "2": "m-2" },
                    "gap": { "unset": null, "1": "gap-1" }
                },
                "compoundVariants": [{ "margin": 2, "gap": 1, "className": "tight" }],
                "defaultVariants": { "margin": 0, "gap": "unset" },
                "incompatible": { "margin": { "2": { "gap": ["1"] } } }
            }"#,
        )
        .unwrap();

        assert_eq!(config.default_for("margin"), Some(&VariantValue::Int(0)));
        assert_eq!(
            config.classes_for("gap", &VariantValue::from("unset")),
            Some(&ClassValue::Null)
        );
        assert_eq!(config.compound_variants.as_ref().map(Vec::len), Some(1));
        assert!(config.incompatible.is_some());
    }

    #[test]
    fn test_from_json_nulls_are_absent() {
        let config = VariantConfig::from_json(
            r#"{"base": null, "variants": null, "compoundVariants": null, "defaultVariants": null}"#,
        )
        .unwrap();
        assert_eq!(config, VariantConfig::new());
    }

    #[test]
    fn test_from_json_error() {
        let err = VariantConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_yaml() {
        let config = VariantConfig::from_yaml(
            r#"
base: card rounded
variants:
  shadow:
    md: drop-shadow-md
    lg: drop-shadow-lg
  disabled:
    "true": opacity-50
defaultVariants:
  shadow: md
"#,
        )
        .unwrap();

        assert_eq!(config.base, ClassValue::from("card rounded"));
        assert_eq!(
            config.classes_for("disabled", &VariantValue::Bool(true)),
            Some(&ClassValue::from("opacity-50"))
        );
        assert_eq!(config.default_for("shadow"), Some(&VariantValue::from("md")));
    }

    #[test]
    fn test_from_json_typed_conflicts() {
        let config = VariantConfig::from_json(
            r#"{
                "variants": {
                    "size": { "large": "l" },
                    "m": { "0": "m-0", "1": "m-1" },
                    "disabled": { "true": "off", "false": "on" }
                },
                "incompatible": {
                    "size": { "large": { "m": [0, "1"], "disabled": [true] } }
                }
            }"#,
        )
        .unwrap();

        let large = &config.incompatible.as_ref().unwrap()["size"]["large"];
        assert_eq!(large["m"], vec!["0", "1"]);
        assert_eq!(large["disabled"], vec!["true"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_unquoted_value_names() {
        let config = VariantConfig::from_yaml(
            r#"
variants:
  disabled:
    true: "off"
    false: "on"
  m:
    0: m-0
    1: m-1
incompatible:
  disabled:
    true:
      m: [0]
"#,
        )
        .unwrap();

        assert_eq!(
            config.classes_for("disabled", &VariantValue::Bool(true)),
            Some(&ClassValue::from("off"))
        );
        assert_eq!(
            config.classes_for("m", &VariantValue::Int(0)),
            Some(&ClassValue::from("m-0"))
        );
        assert_eq!(config.incompatible.as_ref().unwrap()["disabled"]["true"]["m"], vec!["0"]);
    }

    #[test]
    fn test_json_round_trip_preserves_absence() {
        let config = VariantConfig::new().base("a").declare_variants();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"base":"a","variants":{}}"#);
        assert_eq!(VariantConfig::from_json(&json).unwrap(), config);
    }
}
