//! MiniJinja integration.
//!
//! Registers resolvers as template functions so templates can build class
//! attributes from variant selections:
//!
//! ```rust
//! use bato::template::register_resolver;
//! use bato::{bato, VariantConfig};
//! use minijinja::{context, Environment};
//!
//! let button = bato(
//!     VariantConfig::new()
//!         .base("btn")
//!         .variant("size", [("small", "btn-sm"), ("large", "btn-lg")])
//!         .default_variant("size", "small"),
//! );
//!
//! let mut env = Environment::new();
//! register_resolver(&mut env, "button", button);
//!
//! let html = env
//!     .render_str(r#"<button class="{{ button(size='large', class='mt-2') }}">"#, context! {})
//!     .unwrap();
//! assert_eq!(html, r#"<button class="btn btn-lg mt-2">"#);
//! ```

use bato_classes::ClassValue;
use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};

use crate::props::Props;
use crate::resolver::ResolveClasses;
use crate::value::VariantValue;

/// Registers `resolver` as the template function `name`.
///
/// Keyword arguments become props: `class` and `className` are the ad-hoc
/// classes, every other keyword selects an axis value. Strings, booleans and
/// integers are accepted as values; `none` and undefined arguments are
/// skipped. Calling the function without arguments resolves defaults only.
///
/// Resolution errors surface as [`ErrorKind::InvalidOperation`] template
/// errors.
pub fn register_resolver<R>(env: &mut Environment<'_>, name: &str, resolver: R)
where
    R: ResolveClasses + 'static,
{
    env.add_function(
        name.to_string(),
        move |kwargs: Kwargs| -> Result<String, Error> {
            let props = props_from_kwargs(&kwargs)?;
            resolver
                .resolve(props.as_ref())
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );
}

fn props_from_kwargs(kwargs: &Kwargs) -> Result<Option<Props>, Error> {
    let keys: Vec<String> = kwargs.args().map(str::to_string).collect();
    if keys.is_empty() {
        return Ok(None);
    }

    let mut props = Props::new();
    for key in keys {
        let value: Value = kwargs.get(&key)?;
        props = match key.as_str() {
            "class" => props.class(class_value(&key, &value)?),
            "className" => props.class_name(class_value(&key, &value)?),
            _ => match variant_value(&key, &value)? {
                Some(selected) => props.set(&key, selected),
                None => props,
            },
        };
    }
    Ok(Some(props))
}

fn variant_value(key: &str, value: &Value) -> Result<Option<VariantValue>, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(None),
        ValueKind::Bool => Ok(Some(VariantValue::Bool(value.is_true()))),
        ValueKind::String => Ok(value.as_str().map(VariantValue::from)),
        ValueKind::Number => i64::try_from(value.clone())
            .map(|n| Some(VariantValue::Int(n)))
            .map_err(|_| unsupported(key, value)),
        _ => Err(unsupported(key, value)),
    }
}

fn class_value(key: &str, value: &Value) -> Result<ClassValue, Error> {
    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(ClassValue::Null),
        ValueKind::Bool => Ok(ClassValue::Bool(value.is_true())),
        ValueKind::String => Ok(value.as_str().map(ClassValue::from).unwrap_or_default()),
        ValueKind::Number => i64::try_from(value.clone())
            .map(ClassValue::Int)
            .map_err(|_| unsupported(key, value)),
        ValueKind::Seq => value
            .try_iter()?
            .map(|item| class_value(key, &item))
            .collect::<Result<Vec<_>, _>>()
            .map(ClassValue::List),
        _ => Err(unsupported(key, value)),
    }
}

fn unsupported(key: &str, value: &Value) -> Error {
    Error::new(
        ErrorKind::InvalidOperation,
        format!("unsupported value for '{}': {}", key, value),
    )
}
