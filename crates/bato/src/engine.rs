//! Engines: a completion hook shared by resolvers, compositions, and `cx`.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use bato_classes::{ClassList, ClassValue};

use crate::compose::Composed;
use crate::config::VariantConfig;
use crate::resolver::{ResolveClasses, Resolver};

/// A transform applied to every final class string an engine produces.
pub type OnComplete = Arc<dyn Fn(String) -> String + Send + Sync>;

pub(crate) fn complete(hook: Option<&OnComplete>, classes: String) -> String {
    match hook {
        Some(hook) => hook(classes),
        None => classes,
    }
}

/// A factory for resolvers and compositions sharing one completion hook.
///
/// The hook runs exactly once per public call, on the final string, so an
/// engine can post-process output (for example to merge conflicting utility
/// classes) without every resolver knowing about it. Independent engines with
/// different hooks coexist freely.
///
/// # Example
///
/// ```rust
/// use bato::{Engine, Props, VariantConfig};
///
/// let engine = Engine::new().on_complete(|classes| format!("app {}", classes));
///
/// let badge = engine.resolver(
///     VariantConfig::new()
///         .base("badge")
///         .variant("tone", [("info", "badge-info")]),
/// );
///
/// assert_eq!(badge.apply(&Props::new().set("tone", "info")).unwrap(), "app badge badge-info");
/// ```
#[derive(Clone, Default)]
pub struct Engine {
    on_complete: Option<OnComplete>,
}

impl Engine {
    /// Creates an engine without a completion hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completion hook, returning the updated engine.
    pub fn on_complete<F>(mut self, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(hook));
        self
    }

    /// Closes a resolver over `config`.
    ///
    /// An empty configuration yields a resolver that only echoes the ad-hoc
    /// classes of each call.
    pub fn resolver(&self, config: VariantConfig) -> Resolver {
        Resolver::new(config, self.on_complete.clone())
    }

    /// Composes resolvers into one; see [`Composed`].
    pub fn compose<I, R>(&self, components: I) -> Composed
    where
        I: IntoIterator<Item = R>,
        R: ResolveClasses + 'static,
    {
        components
            .into_iter()
            .fold(Composed::new(self.on_complete.clone()), Composed::with)
    }

    /// Flattens class values, then applies the hook.
    pub fn cx<I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Borrow<ClassValue>,
    {
        let mut classes = ClassList::new();
        for input in inputs {
            classes.push(input.borrow());
        }
        complete(self.on_complete.as_ref(), classes.finish())
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
