//! Class-token flattening.
//!
//! This crate provides the primitive that turns nested, possibly falsy class
//! payloads into a single class attribute string:
//!
//! - [`ClassValue`]: a class contribution (string, toggle map, nested list, ...)
//! - [`ClassList`]: an ordered token set that keeps first occurrences
//! - [`flatten`]: one-shot flattening of several values
//! - [`classes!`]: builds a [`ClassValue::List`] from heterogeneous items
//!
//! Flattening is idempotent: feeding an already flattened string back in
//! yields the same string.
//!
//! ```rust
//! use bato_classes::{classes, flatten};
//!
//! let once = flatten([classes!["a b", ["b", "c"]]]);
//! assert_eq!(flatten([classes![once.as_str()]]), once);
//! ```

mod list;
mod value;

pub use list::{flatten, ClassList};
pub use value::ClassValue;

/// Builds a [`ClassValue::List`], converting each item with `ClassValue::from`.
///
/// ```rust
/// use bato_classes::{classes, ClassValue};
///
/// let value = classes!["btn", Some("active"), ["rounded", "shadow"]];
/// assert!(matches!(value, ClassValue::List(ref items) if items.len() == 3));
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        $crate::ClassValue::List(::std::vec::Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ClassValue::List(::std::vec![$($crate::ClassValue::from($item)),+])
    };
}
