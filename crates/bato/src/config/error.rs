//! Configuration loading and validation errors.

use std::fmt;

/// A single authoring mistake found by [`VariantConfig::validate`](super::VariantConfig::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// A section references an axis that `variants` does not declare.
    UnknownAxis { section: &'static str, axis: String },
    /// A section references a value the axis does not declare.
    UnknownValue {
        section: &'static str,
        axis: String,
        value: String,
    },
    /// An `incompatible` entry lists its own axis as a conflict.
    SelfIncompatible { axis: String, value: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::UnknownAxis { section, axis } => {
                write!(f, "{} references undeclared axis '{}'", section, axis)
            }
            ConfigIssue::UnknownValue {
                section,
                axis,
                value,
            } => {
                write!(
                    f,
                    "{} references undeclared value '{}' on axis '{}'",
                    section, value, axis
                )
            }
            ConfigIssue::SelfIncompatible { axis, value } => {
                write!(
                    f,
                    "incompatible entry '{}: {}' lists its own axis",
                    axis, value
                )
            }
        }
    }
}

/// Error returned when a variant configuration cannot be loaded or is invalid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid variant config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid variant config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid variant config: {}", join_issues(.0))]
    Invalid(Vec<ConfigIssue>),
}

impl ConfigError {
    /// Returns the validation issues, if this is a validation error.
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            ConfigError::Invalid(issues) => issues,
            _ => &[],
        }
    }
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
