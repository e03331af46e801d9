//! Resolvers: configurations closed over into callable class builders.
//!
//! - [`Resolver`]: resolves one [`VariantConfig`]
//! - [`ResolveClasses`]: the interface shared by resolvers and compositions
//! - [`ResolveError`]: the only call-time failure (incompatible selections)

mod algorithm;
mod error;
mod incompatible;

use std::fmt;
use std::sync::Arc;

use bato_classes::ClassList;

use crate::config::VariantConfig;
use crate::engine::{complete, OnComplete};
use crate::props::Props;

pub use error::ResolveError;

/// Something that turns props into classes.
///
/// Implemented by [`Resolver`] and [`Composed`](crate::Composed), which lets
/// compositions nest.
pub trait ResolveClasses: Send + Sync {
    /// Resolves props into a token list, before any completion hook runs.
    ///
    /// `None` means the call carried no props at all, which is not the same
    /// as an empty [`Props`]: see the resolution paths in [`Resolver`].
    fn resolve_list(&self, props: Option<&Props>) -> Result<ClassList, ResolveError>;

    /// Turns a resolved list into the final string.
    fn complete(&self, classes: ClassList) -> String {
        classes.finish()
    }

    /// Resolves props into the final class string.
    fn resolve(&self, props: Option<&Props>) -> Result<String, ResolveError> {
        let classes = self.resolve_list(props)?;
        Ok(self.complete(classes))
    }
}

/// A class builder for one variant configuration.
///
/// Resolvers are cheap to clone and safe to share across threads; the
/// configuration is never mutated after construction.
///
/// Three resolution paths exist:
///
/// - without a `variants` section, only base and ad-hoc classes are emitted
/// - without props ([`defaults`](Self::defaults)), every axis uses its default
///   and only compound rules made of plain conditions are matched against
///   the defaults
/// - with props ([`apply`](Self::apply)), incompatibilities are checked, then
///   axes, compound rules, and finally ad-hoc classes are emitted
///
/// # Example
///
/// ```rust
/// use bato::{bato, CompoundVariant, Props, VariantConfig};
///
/// let button = bato(
///     VariantConfig::new()
///         .base("btn")
///         .variant("size", [("small", "btn-sm"), ("large", "btn-lg")])
///         .variant("tone", [("primary", "bg-blue"), ("danger", "bg-red")])
///         .compound(
///             CompoundVariant::new()
///                 .when("size", "large")
///                 .when("tone", "danger")
///                 .class("uppercase"),
///         )
///         .default_variant("size", "small")
///         .incompatible("size", "small", "tone", ["danger"]),
/// );
///
/// assert_eq!(button.defaults(), "btn btn-sm");
///
/// let props = Props::new().set("size", "large").set("tone", "danger").class("mt-2");
/// assert_eq!(button.apply(&props).unwrap(), "btn btn-lg bg-red uppercase mt-2");
///
/// let props = Props::new().set("size", "small").set("tone", "danger");
/// assert!(button.apply(&props).is_err());
/// ```
#[derive(Clone)]
pub struct Resolver {
    config: Arc<VariantConfig>,
    on_complete: Option<OnComplete>,
}

impl Resolver {
    pub(crate) fn new(config: VariantConfig, on_complete: Option<OnComplete>) -> Self {
        Self {
            config: Arc::new(config),
            on_complete,
        }
    }

    /// Returns the configuration this resolver closes over.
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Resolves with optional props; `None` takes the defaults path.
    pub fn resolve(&self, props: Option<&Props>) -> Result<String, ResolveError> {
        ResolveClasses::resolve(self, props)
    }

    /// Resolves with explicit props.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Incompatible`] if two passed selections are
    /// declared incompatible.
    pub fn apply(&self, props: &Props) -> Result<String, ResolveError> {
        ResolveClasses::resolve(self, Some(props))
    }

    /// Resolves without props, using only the configured defaults.
    ///
    /// Incompatibilities only involve passed props, so this cannot fail.
    pub fn defaults(&self) -> String {
        let classes = algorithm::resolve(&self.config, None).unwrap_or_default();
        self.complete(classes)
    }
}

impl ResolveClasses for Resolver {
    fn resolve_list(&self, props: Option<&Props>) -> Result<ClassList, ResolveError> {
        algorithm::resolve(&self.config, props)
    }

    fn complete(&self, classes: ClassList) -> String {
        complete(self.on_complete.as_ref(), classes.finish())
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("config", &self.config)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
