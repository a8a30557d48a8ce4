/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use dupe::Dupe;
use itertools::Itertools;
use mason_core::target::label::TargetLabel;
use mason_core::target::name::TargetName;
use mason_node::attrs::coercion_context::AttrCoercionContext;
use mason_node::attrs::values::AttrValues;
use mason_node::nodes::unconfigured::TargetNode;
use mason_node::rule::RuleSchema;

use crate::attrs::coerce::AttrTypeCoerce;
use crate::parser::context::RecordedRule;

#[derive(Debug, thiserror::Error)]
enum CoerceNodeError {
    #[error("Cannot coerce attributes of `{0}`:\n{1}")]
    AttributeFailures(TargetLabel, String),
    #[error("Recorded rule of type `{0}` coerced against schema for `{1}`")]
    SchemaMismatch(String, String),
}

/// Coerce one recorded rule against its schema, producing the unconfigured
/// node. Every attribute is attempted even after one fails; the failures are
/// aggregated into a single error for this rule instance, so one bad rule
/// never hides its other problems and never blocks sibling rules.
pub fn coerce_recorded_rule(
    recorded: &RecordedRule,
    rule: &Arc<RuleSchema>,
    ctx: &dyn AttrCoercionContext,
) -> anyhow::Result<TargetNode> {
    if recorded.rule_type != rule.name() {
        return Err(CoerceNodeError::SchemaMismatch(
            recorded.rule_type.clone(),
            rule.name().to_owned(),
        )
        .into());
    }

    let label = TargetLabel::new(
        recorded.package.dupe(),
        TargetName::new(recorded.target_name()?)?,
    );

    let mut values = AttrValues::with_capacity(recorded.attrs.len());
    let mut failures: Vec<String> = Vec::new();

    // Walking the schema in order keeps the value vector id-sorted.
    for (name, id, attr) in rule.attributes().attr_specs() {
        match recorded.attrs.get(name) {
            Some(raw) => match attr.coercer().coerce_item(ctx, raw) {
                Ok(coerced) => values.push_sorted(id, coerced),
                Err(e) => failures.push(format!("  attribute `{}`: {:#}", name, e)),
            },
            None => {
                // The binder lets an explicit None through for a required
                // attribute; it surfaces here, where no default can fill it.
                if !attr.is_optional() {
                    failures.push(format!("  attribute `{}`: missing required attribute", name));
                }
            }
        }
    }

    if !failures.is_empty() {
        return Err(CoerceNodeError::AttributeFailures(label, failures.iter().join("\n")).into());
    }

    Ok(TargetNode::new(
        label,
        rule.dupe(),
        values,
        recorded.visibility.clone(),
        recorded.within_view.clone(),
    ))
}
