/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;
use mason_core::target::label::TargetLabel;
use starlark_map::ordered_map::OrderedMap;

use crate::attrs::coerced_attr::CoercedAttr;
use crate::attrs::configuration_context::AttrConfigurationContext;
use crate::attrs::values::AttrValues;
use crate::nodes::constructor_arg::ConstructorArg;
use crate::rule::RuleSchema;

/// A target declaration after coercion but before any configuration has been
/// applied. One of these is produced per target in a build file, and it is
/// shared by every configuration that target is later built in.
#[derive(Debug, Clone, Eq, PartialEq, Allocative)]
pub struct TargetNode {
    label: TargetLabel,
    rule: Arc<RuleSchema>,
    attr_values: AttrValues,
    visibility: Vec<String>,
    within_view: Vec<String>,
}

impl TargetNode {
    pub fn new(
        label: TargetLabel,
        rule: Arc<RuleSchema>,
        attr_values: AttrValues,
        visibility: Vec<String>,
        within_view: Vec<String>,
    ) -> TargetNode {
        TargetNode {
            label,
            rule,
            attr_values,
            visibility,
            within_view,
        }
    }

    pub fn label(&self) -> &TargetLabel {
        &self.label
    }

    pub fn rule(&self) -> &Arc<RuleSchema> {
        &self.rule
    }

    pub fn rule_type(&self) -> &str {
        self.rule.name()
    }

    pub fn visibility(&self) -> &[String] {
        &self.visibility
    }

    pub fn within_view(&self) -> &[String] {
        &self.within_view
    }

    /// The value of `name`, falling back to the attribute's default when the
    /// declaration omitted it. `None` when the rule has no such attribute.
    pub fn attr(&self, name: &str) -> Option<&CoercedAttr> {
        let id = self.rule.attributes().attribute_id(name)?;
        match self.attr_values.get(id) {
            Some(value) => Some(value),
            None => self
                .rule
                .attributes()
                .attribute_by_id(id)
                .1
                .default()
                .map(|d| &**d),
        }
    }

    /// Iterate every attribute of the rule in schema order, substituting
    /// defaults for values the declaration did not set.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &CoercedAttr)> {
        self.rule.attributes().attr_specs().filter_map(|(name, id, attr)| {
            match self.attr_values.get(id) {
                Some(value) => Some((name, value)),
                None => attr.default().map(|d| (name, &**d)),
            }
        })
    }

    /// The unconfigured dependency edges of this target. Only attributes
    /// whose dep hint is set contribute edges.
    pub fn deps(&self) -> Vec<TargetLabel> {
        let mut deps = Vec::new();
        for (_, id, attr) in self.rule.attributes().attr_specs() {
            if !attr.is_dep() {
                continue;
            }
            let value = match self.attr_values.get(id) {
                Some(value) => value,
                None => match attr.default() {
                    Some(d) => &**d,
                    None => continue,
                },
            };
            value.traverse_deps(&mut |label| deps.push(label.dupe()));
        }
        deps
    }

    /// Apply a configuration pair to every attribute, producing the value set
    /// the rule implementation will be constructed from.
    pub fn configure(&self, ctx: &dyn AttrConfigurationContext) -> anyhow::Result<ConstructorArg> {
        let mut values = OrderedMap::with_capacity(self.rule.attributes().len());
        for (name, value) in self.attrs() {
            values.insert(name.to_owned(), value.configure(self.label.pkg(), ctx)?);
        }
        Ok(ConstructorArg::new(self.rule.dupe(), values))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mason_core::target::label::TargetLabel;

    use crate::attrs::attr::Attribute;
    use crate::attrs::attr_type::AttrType;
    use crate::attrs::coerced_attr::CoercedAttr;
    use crate::attrs::spec::AttributeSpec;
    use crate::attrs::values::AttrValues;
    use crate::nodes::unconfigured::TargetNode;
    use crate::rule::RuleSchema;

    fn test_node() -> TargetNode {
        let rule = Arc::new(RuleSchema::new(
            "example_rule".to_owned(),
            AttributeSpec::from(vec![
                ("name".to_owned(), Attribute::required(AttrType::string())),
                (
                    "deps".to_owned(),
                    Attribute::with_default(
                        AttrType::list(AttrType::dep()),
                        CoercedAttr::List(Box::new([])),
                    ),
                ),
                (
                    "extra".to_owned(),
                    Attribute::with_default(
                        AttrType::list(AttrType::dep()),
                        CoercedAttr::List(Box::new([CoercedAttr::Dep(
                            TargetLabel::testing_parse("root//default:dep"),
                        )])),
                    ),
                ),
            ])
            .unwrap(),
        ));

        let mut values = AttrValues::with_capacity(2);
        values.push_sorted(
            rule.attributes().attribute_id("name").unwrap(),
            CoercedAttr::String(Arc::from("foo")),
        );
        values.push_sorted(
            rule.attributes().attribute_id("deps").unwrap(),
            CoercedAttr::List(Box::new([CoercedAttr::Dep(TargetLabel::testing_parse(
                "root//pkg:bar",
            ))])),
        );

        TargetNode::new(
            TargetLabel::testing_parse("root//pkg:foo"),
            rule,
            values,
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_attr_with_default_fallback() {
        let node = test_node();
        assert_eq!(
            "\"foo\"",
            node.attr("name").unwrap().to_string()
        );
        // `extra` was not set, so its default is returned.
        assert_eq!(
            "[\"root//default:dep\"]",
            node.attr("extra").unwrap().to_string()
        );
        assert!(node.attr("unknown").is_none());
    }

    #[test]
    fn test_deps_include_defaults() {
        let node = test_node();
        let deps: Vec<String> = node.deps().iter().map(|d| d.to_string()).collect();
        assert_eq!(vec!["root//pkg:bar", "root//default:dep"], deps);
    }
}
