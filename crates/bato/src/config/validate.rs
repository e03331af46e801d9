//! Optional authoring checks for variant configurations.

use super::compound::Condition;
use super::error::{ConfigError, ConfigIssue};
use super::variants::VariantConfig;
use crate::value::UNSET;

impl VariantConfig {
    /// Checks that every default, compound rule, and incompatibility entry
    /// references declared axes and values.
    ///
    /// Resolution never calls this: unknown references are tolerated at call
    /// time and simply never match. Use it in tests or at startup to catch
    /// typos early.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every issue found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }

    /// Collects authoring issues in section order.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(defaults) = &self.default_variants {
            for (axis, value) in defaults {
                self.check_value("defaultVariants", axis, &value.key(), &mut issues);
            }
        }

        for rule in self.compound_variants.iter().flatten() {
            for (axis, condition) in rule.conditions() {
                match condition {
                    Condition::Is(value) => {
                        self.check_value("compoundVariants", axis, &value.key(), &mut issues)
                    }
                    Condition::OneOf(values) => {
                        for value in values {
                            self.check_value("compoundVariants", axis, &value.key(), &mut issues);
                        }
                    }
                }
            }
        }

        for (axis, by_value) in self.incompatible.iter().flatten() {
            for (value, conflicts) in by_value {
                self.check_value("incompatible", axis, value, &mut issues);
                for (other_axis, forbidden) in conflicts {
                    if other_axis == axis {
                        issues.push(ConfigIssue::SelfIncompatible {
                            axis: axis.clone(),
                            value: value.clone(),
                        });
                        continue;
                    }
                    for other_value in forbidden {
                        self.check_value("incompatible", other_axis, other_value, &mut issues);
                    }
                }
            }
        }

        issues
    }

    fn check_value(
        &self,
        section: &'static str,
        axis: &str,
        value: &str,
        issues: &mut Vec<ConfigIssue>,
    ) {
        let Some(values) = self.variants.as_ref().and_then(|v| v.get(axis)) else {
            let issue = ConfigIssue::UnknownAxis {
                section,
                axis: axis.to_string(),
            };
            if !issues.contains(&issue) {
                issues.push(issue);
            }
            return;
        };

        if value != UNSET && !values.contains_key(value) {
            issues.push(ConfigIssue::UnknownValue {
                section,
                axis: axis.to_string(),
                value: value.to_string(),
            });
        }
    }
}
