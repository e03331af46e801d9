//! Composition of several resolvers into one.

use std::fmt;
use std::sync::Arc;

use bato_classes::ClassList;

use crate::engine::{complete, OnComplete};
use crate::props::Props;
use crate::resolver::{ResolveClasses, ResolveError};

/// Several resolvers acting as one.
///
/// Every component receives the same selections, with the ad-hoc classes
/// stripped, and their outputs are joined in component order. The ad-hoc
/// classes of the call are appended once, at the end. Components ignore axes
/// they do not declare, so props may freely mix axes of all components.
///
/// Components always take the props path, even when the composed call has
/// no props. Component hooks do not run; only the composing engine's hook is
/// applied, once, to the joined output.
///
/// # Example
///
/// ```rust
/// use bato::{bato, compose, Props, VariantConfig};
///
/// let shadow = bato(
///     VariantConfig::new()
///         .variant("shadow", [("sm", "shadow-sm"), ("md", "shadow-md")])
///         .default_variant("shadow", "sm"),
/// );
/// let gap = bato(VariantConfig::new().variant("gap", [(1, "gap-1"), (2, "gap-2")]));
///
/// let card = compose([shadow, gap]);
/// assert_eq!(card.resolve(None).unwrap(), "shadow-sm");
/// assert_eq!(
///     card.apply(&Props::new().set("gap", 2).class("p-4")).unwrap(),
///     "shadow-sm gap-2 p-4"
/// );
/// ```
#[derive(Clone)]
pub struct Composed {
    components: Vec<Arc<dyn ResolveClasses>>,
    on_complete: Option<OnComplete>,
}

impl Composed {
    pub(crate) fn new(on_complete: Option<OnComplete>) -> Self {
        Self {
            components: Vec::new(),
            on_complete,
        }
    }

    /// Appends a component, returning the updated composition.
    ///
    /// Components may be of different kinds, including other compositions.
    pub fn with<R>(mut self, component: R) -> Self
    where
        R: ResolveClasses + 'static,
    {
        self.components.push(Arc::new(component));
        self
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Resolves with optional props.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolveError`] raised by a component.
    pub fn resolve(&self, props: Option<&Props>) -> Result<String, ResolveError> {
        ResolveClasses::resolve(self, props)
    }

    /// Resolves with explicit props.
    pub fn apply(&self, props: &Props) -> Result<String, ResolveError> {
        ResolveClasses::resolve(self, Some(props))
    }
}

impl ResolveClasses for Composed {
    fn resolve_list(&self, props: Option<&Props>) -> Result<ClassList, ResolveError> {
        let shared = props.map(Props::without_classes).unwrap_or_default();

        let mut classes = ClassList::new();
        for component in &self.components {
            let output = component.resolve_list(Some(&shared))?;
            classes.extend(output.iter());
        }

        if let Some(props) = props {
            classes.push(&props.class);
            classes.push(&props.class_name);
        }
        Ok(classes)
    }

    fn complete(&self, classes: ClassList) -> String {
        complete(self.on_complete.as_ref(), classes.finish())
    }
}

impl fmt::Debug for Composed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composed")
            .field("components", &self.components.len())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}
