//! Ordered, deduplicating token accumulation.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use crate::value::ClassValue;

/// An ordered set of class tokens.
///
/// Tokens keep the position of their first occurrence; pushing a token that
/// is already present is a no-op. This is the accumulator behind [`flatten`],
/// exposed so that callers assembling output in several steps can share one
/// list instead of re-parsing intermediate strings.
///
/// # Example
///
/// ```rust
/// use bato_classes::{ClassList, ClassValue};
///
/// let mut list = ClassList::new();
/// list.push(&ClassValue::from("btn rounded"));
/// list.push_str("rounded shadow");
/// assert_eq!(list.finish(), "btn rounded shadow");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
    seen: HashSet<String>,
}

impl ClassList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every truthy token of `value`, depth-first.
    pub fn push(&mut self, value: &ClassValue) -> &mut Self {
        match value {
            ClassValue::Null | ClassValue::Bool(_) | ClassValue::Int(0) => {}
            ClassValue::Int(n) => {
                self.push_token(&n.to_string());
            }
            ClassValue::Str(classes) => {
                self.push_str(classes);
            }
            ClassValue::List(items) => {
                for item in items {
                    self.push(item);
                }
            }
            ClassValue::Map(entries) => {
                for (classes, flag) in entries {
                    if *flag == Some(true) {
                        self.push_str(classes);
                    }
                }
            }
        }
        self
    }

    /// Appends the whitespace-separated tokens of `classes`.
    pub fn push_str(&mut self, classes: &str) -> &mut Self {
        for token in classes.split_whitespace() {
            self.push_token(token);
        }
        self
    }

    fn push_token(&mut self, token: &str) {
        if self.seen.insert(token.to_string()) {
            self.tokens.push(token.to_string());
        }
    }

    /// Returns `true` if `token` is already in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    /// Iterates over tokens in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns the number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no token has been pushed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Joins the tokens with single spaces.
    pub fn finish(self) -> String {
        self.tokens.join(" ")
    }
}

impl<'a> Extend<&'a str> for ClassList {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for classes in iter {
            self.push_str(classes);
        }
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Flattens class values into one space-joined string.
///
/// Falsy leaves are dropped, strings are split on whitespace, and each token
/// is kept only at its first occurrence.
///
/// # Example
///
/// ```rust
/// use bato_classes::{classes, flatten};
///
/// let out = flatten([classes!["a b", ["b", "c"]], classes![false, "a d"]]);
/// assert_eq!(out, "a b c d");
/// ```
pub fn flatten<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<ClassValue>,
{
    let mut list = ClassList::new();
    for input in inputs {
        list.push(input.borrow());
    }
    list.finish()
}
