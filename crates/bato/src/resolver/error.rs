//! Resolution errors.

/// Error returned when a resolver call cannot produce a class string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Two explicitly passed selections are declared incompatible.
    #[error(
        "incompatible variants: {{ {axis}: \"{value}\" }} conflicts with {{ {other_axis}: \"{other_value}\" }}"
    )]
    Incompatible {
        axis: String,
        value: String,
        other_axis: String,
        other_value: String,
    },
}
