//! Incompatibility checking.

use tracing::debug;

use super::error::ResolveError;
use crate::config::VariantConfig;
use crate::props::Props;

/// Fails on the first declared conflict between two passed selections.
///
/// Entries are scanned in declaration order: axis, then value, then the
/// conflicting axis. Only axes present in `props` take part; defaults are
/// never checked. Conflicts are directed and an axis listing itself is
/// ignored.
pub(crate) fn check(config: &VariantConfig, props: &Props) -> Result<(), ResolveError> {
    let Some(rules) = &config.incompatible else {
        return Ok(());
    };

    for (axis, by_value) in rules {
        let Some(value) = props.get(axis) else {
            continue;
        };
        let value = value.key();
        let Some(conflicts) = by_value.get(value.as_ref()) else {
            continue;
        };

        for (other_axis, forbidden) in conflicts {
            if other_axis == axis {
                continue;
            }
            let Some(other_value) = props.get(other_axis) else {
                continue;
            };
            let other_value = other_value.key();
            if forbidden.iter().any(|f| f.as_str() == other_value.as_ref()) {
                debug!(
                    axis = %axis,
                    value = %value,
                    other_axis = %other_axis,
                    other_value = %other_value,
                    "rejecting incompatible variant selection"
                );
                return Err(ResolveError::Incompatible {
                    axis: axis.clone(),
                    value: value.into_owned(),
                    other_axis: other_axis.clone(),
                    other_value: other_value.into_owned(),
                });
            }
        }
    }

    Ok(())
}
