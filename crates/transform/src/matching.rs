//! Declarative input matching for filters.
//!
//! A filter declares its inputs through a [`MatchSpec`]: one
//! [`MatchRule`] per input, naming the predicate (equality against a
//! field's `param` metadata) and whether the bound field's metadata is
//! forwarded unchanged into the outputs. The [`apply_filter`] driver
//! consumes the descriptor, binds upstream fields to rules, and invokes
//! the filter's transform.

use crate::error::{Result, TransformError};
use crate::fields::Field;
use crate::filters::Filter;

/// One declared filter input.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRule {
    /// Name of the input as the filter's transform knows it.
    pub input: &'static str,
    /// A field binds to this rule when its `param` metadata equals this
    /// value.
    pub param: String,
    /// Whether the bound field's metadata is forwarded unchanged: a
    /// forwarded binding is the template the filter constructs outputs
    /// from.
    pub forward: bool,
}

impl MatchRule {
    /// Rule binding `input` to fields whose param equals `param`,
    /// forwarded into the outputs.
    pub fn forwarded(input: &'static str, param: impl Into<String>) -> Self {
        Self {
            input,
            param: param.into(),
            forward: true,
        }
    }

    /// Whether `field` satisfies this rule's predicate.
    pub fn matches(&self, field: &Field) -> bool {
        field.param() == self.param
    }
}

/// The full input descriptor a filter exposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchSpec {
    pub rules: Vec<MatchRule>,
}

impl MatchSpec {
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }
}

/// Bind upstream fields to a filter's declared inputs and run it.
///
/// Each rule binds to the first field matching its predicate; a rule
/// with no matching field is an error. Fields matched by no rule pass
/// through untouched, and the transform's outputs are appended after
/// them.
pub fn apply_filter(filter: &dyn Filter, fields: Vec<Field>) -> Result<Vec<Field>> {
    let spec = filter.match_spec();
    let mut slots: Vec<Option<Field>> = spec.rules.iter().map(|_| None).collect();
    let mut passthrough = Vec::new();

    for field in fields {
        let open = spec
            .rules
            .iter()
            .zip(slots.iter())
            .position(|(rule, slot)| slot.is_none() && rule.matches(&field));
        match open {
            Some(idx) => slots[idx] = Some(field),
            None => passthrough.push(field),
        }
    }

    let mut bound = Vec::with_capacity(spec.rules.len());
    for (slot, rule) in slots.into_iter().zip(&spec.rules) {
        bound.push(slot.ok_or_else(|| TransformError::MissingInput {
            filter: filter.name(),
            param: rule.param.clone(),
        })?);
    }

    let mut output = passthrough;
    output.extend(filter.forward_transform(&bound)?);
    Ok(output)
}
