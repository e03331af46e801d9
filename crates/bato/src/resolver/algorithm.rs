//! The variant resolution algorithm.
//!
//! A call takes one of three paths:
//!
//! 1. **Base only**: the configuration declares no `variants` section. The
//!    output is the base classes followed by the ad-hoc classes.
//! 2. **Defaults**: no props were passed. Each axis contributes its default
//!    value, then compound rules whose plain conditions all equal the
//!    defaults contribute. One-of conditions never match on this path.
//! 3. **Props**: incompatibilities are checked first, then each axis resolves
//!    to its passed value (else its default), compound rules are matched
//!    against the passed values (falling back to defaults for plain
//!    conditions), and the ad-hoc classes come last.
//!
//! Axes are visited in declaration order and compound rules in the order
//! they were added. Every matching rule contributes.

use bato_classes::{ClassList, ClassValue};
use indexmap::IndexMap;
use tracing::trace;

use super::error::ResolveError;
use super::incompatible;
use crate::config::{AxisValues, CompoundVariant, Condition, VariantConfig};
use crate::props::Props;
use crate::value::VariantValue;

type Defaults = IndexMap<String, VariantValue>;

pub(crate) fn resolve(
    config: &VariantConfig,
    props: Option<&Props>,
) -> Result<ClassList, ResolveError> {
    let mut classes = ClassList::new();
    classes.push(&config.base);

    let Some(variants) = &config.variants else {
        trace!("no variants declared, resolving base classes only");
        if let Some(props) = props {
            push_adhoc(&mut classes, props);
        }
        return Ok(classes);
    };

    match props {
        None => resolve_defaults(config, variants, &mut classes),
        Some(props) => resolve_props(config, variants, props, &mut classes)?,
    }

    Ok(classes)
}

fn resolve_defaults(
    config: &VariantConfig,
    variants: &IndexMap<String, AxisValues>,
    classes: &mut ClassList,
) {
    let Some(defaults) = &config.default_variants else {
        return;
    };

    for (axis, values) in variants {
        if let Some(payload) = defaults.get(axis).and_then(|value| lookup(values, value)) {
            classes.push(payload);
        }
    }

    for (index, rule) in config.compound_variants.iter().flatten().enumerate() {
        let matched = rule.conditions.iter().all(|(axis, condition)| match condition {
            Condition::Is(expected) => defaults.get(axis) == Some(expected),
            Condition::OneOf(_) => false,
        });
        if matched {
            push_rule(classes, index, rule);
        }
    }
}

fn resolve_props(
    config: &VariantConfig,
    variants: &IndexMap<String, AxisValues>,
    props: &Props,
    classes: &mut ClassList,
) -> Result<(), ResolveError> {
    incompatible::check(config, props)?;

    let defaults = config.default_variants.as_ref();

    for (axis, values) in variants {
        let selected = props
            .get(axis)
            .filter(|value| !value.key().is_empty())
            .or_else(|| defaults.and_then(|d| d.get(axis)));
        if let Some(payload) = selected.and_then(|value| lookup(values, value)) {
            classes.push(payload);
        }
    }

    for (index, rule) in config.compound_variants.iter().flatten().enumerate() {
        if rule_matches(rule, props, defaults) {
            push_rule(classes, index, rule);
        }
    }

    push_adhoc(classes, props);
    Ok(())
}

fn rule_matches(rule: &CompoundVariant, props: &Props, defaults: Option<&Defaults>) -> bool {
    rule.conditions.iter().all(|(axis, condition)| match condition {
        Condition::OneOf(accepted) => props
            .get(axis)
            .is_some_and(|value| accepted.contains(value)),
        Condition::Is(expected) => {
            let effective = props
                .get(axis)
                .or_else(|| defaults.and_then(|d| d.get(axis)));
            effective == Some(expected)
        }
    })
}

fn lookup<'a>(values: &'a AxisValues, selected: &VariantValue) -> Option<&'a ClassValue> {
    if selected.is_unset() {
        return None;
    }
    values.get(selected.key().as_ref())
}

fn push_rule(classes: &mut ClassList, index: usize, rule: &CompoundVariant) {
    trace!(rule = index, "compound variant matched");
    classes.push(&rule.class);
    classes.push(&rule.class_name);
}

fn push_adhoc(classes: &mut ClassList, props: &Props) {
    classes.push(&props.class);
    classes.push(&props.class_name);
}
