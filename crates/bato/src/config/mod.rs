//! Variant configuration model.
//!
//! - [`VariantConfig`]: base classes, axes, compound rules, defaults, and
//!   incompatibilities, with a fluent builder and JSON/YAML loading
//! - [`CompoundVariant`] and [`Condition`]: conjunctive multi-axis rules
//! - [`ConfigError`] and [`ConfigIssue`]: loading and validation errors

mod compound;
mod error;
mod validate;
mod variants;

pub use compound::{CompoundVariant, Condition};
pub use error::{ConfigError, ConfigIssue};
pub use variants::{AxisValues, Incompatibilities, VariantConfig};
