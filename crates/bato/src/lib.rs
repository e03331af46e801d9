//! # Bato - variant-driven class strings
//!
//! Bato turns a declarative component description into class attribute
//! strings. A [`VariantConfig`] lists base classes, variant axes with per-value
//! classes, compound rules, defaults, and incompatible selections. A
//! [`Resolver`] closes over one configuration and produces the final,
//! deduplicated class string for each call.
//!
//! ## Quick Start
//!
//! ```rust
//! use bato::{bato, CompoundVariant, Props, VariantConfig};
//!
//! let button = bato(
//!     VariantConfig::new()
//!         .base("button font-semibold border rounded")
//!         .variant("intent", [("primary", "bg-blue-500 text-white"), ("secondary", "bg-white")])
//!         .variant("size", [("small", "text-sm py-1"), ("medium", "text-base py-2")])
//!         .compound(
//!             CompoundVariant::new()
//!                 .when("intent", "primary")
//!                 .when("size", "medium")
//!                 .class("uppercase"),
//!         )
//!         .default_variant("intent", "primary")
//!         .default_variant("size", "medium"),
//! );
//!
//! assert_eq!(
//!     button.defaults(),
//!     "button font-semibold border rounded bg-blue-500 text-white text-base py-2 uppercase"
//! );
//!
//! let props = Props::new().set("intent", "secondary").class("w-full");
//! assert_eq!(
//!     button.apply(&props).unwrap(),
//!     "button font-semibold border rounded bg-white text-base py-2 w-full"
//! );
//! ```
//!
//! ## Concepts
//!
//! - **Axes** are resolved in declaration order: a passed value wins, else
//!   the axis default. The reserved value [`UNSET`] selects nothing.
//! - **Compound rules** add classes when all their conditions hold. Every
//!   matching rule contributes, in declaration order.
//! - **Incompatibilities** are directed: `size: large` forbidding `color: red`
//!   does not imply the reverse. Only explicitly passed selections are
//!   checked; a violation is the one error a call can return.
//! - **Ad-hoc classes** (`class`, then `className`) always come last.
//!
//! ## Engines
//!
//! The free functions [`bato`], [`compose`], and [`cx`] use a shared engine
//! without a completion hook. Build an [`Engine`] to post-process every
//! output string:
//!
//! ```rust
//! use bato::{Engine, VariantConfig};
//!
//! let engine = Engine::new().on_complete(|classes| classes.replace("p-2 p-4", "p-4"));
//! let panel = engine.resolver(VariantConfig::new().base("p-2 p-4"));
//! assert_eq!(panel.defaults(), "p-4");
//! ```
//!
//! ## Loading Configurations
//!
//! Configurations deserialize from JSON or YAML using the camelCase field
//! names (`compoundVariants`, `defaultVariants`, `className`); see
//! [`VariantConfig::from_json`] and [`VariantConfig::from_yaml`].
//!
//! ## Templates
//!
//! The [`template`] module exposes resolvers as MiniJinja functions.

mod compose;
pub mod config;
mod engine;
mod props;
mod resolver;
pub mod template;
mod value;

use std::borrow::Borrow;

use once_cell::sync::Lazy;

pub use bato_classes::{classes, flatten, ClassList, ClassValue};
pub use compose::Composed;
pub use config::{
    AxisValues, CompoundVariant, Condition, ConfigError, ConfigIssue, Incompatibilities,
    VariantConfig,
};
pub use engine::{Engine, OnComplete};
pub use props::Props;
pub use resolver::{ResolveClasses, ResolveError, Resolver};
pub use value::{VariantValue, UNSET};

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Returns the shared engine used by [`bato`], [`compose`], and [`cx`].
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// Closes a resolver over `config` using the default engine.
pub fn bato(config: VariantConfig) -> Resolver {
    DEFAULT_ENGINE.resolver(config)
}

/// Composes resolvers using the default engine.
pub fn compose<I, R>(components: I) -> Composed
where
    I: IntoIterator<Item = R>,
    R: ResolveClasses + 'static,
{
    DEFAULT_ENGINE.compose(components)
}

/// Flattens class values using the default engine.
///
/// ```rust
/// use bato::{classes, cx};
///
/// assert_eq!(cx([classes!["a", Some("b"), ["a", "c"]]]), "a b c");
/// ```
pub fn cx<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<ClassValue>,
{
    DEFAULT_ENGINE.cx(inputs)
}
