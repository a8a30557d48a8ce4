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
use mason_core::target::label::ConfiguredTargetLabel;
use starlark_map::ordered_map::OrderedMap;

use crate::attrs::configured_attr::ConfiguredAttr;
use crate::rule::RuleSchema;

/// The fully configured value set a rule implementation is constructed from.
/// Equality is structural, which is what makes configuration idempotent to
/// observe: configuring the same node with the same configuration twice
/// yields equal constructor args.
#[derive(Debug, Clone, Eq, PartialEq, Allocative)]
pub struct ConstructorArg {
    rule: Arc<RuleSchema>,
    values: OrderedMap<String, ConfiguredAttr>,
}

impl ConstructorArg {
    pub fn new(rule: Arc<RuleSchema>, values: OrderedMap<String, ConfiguredAttr>) -> ConstructorArg {
        ConstructorArg { rule, values }
    }

    pub fn rule(&self) -> &Arc<RuleSchema> {
        &self.rule
    }

    pub fn get(&self, name: &str) -> Option<&ConfiguredAttr> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &ConfiguredAttr)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Every configured target referenced by any attribute, in attribute
    /// order.
    pub fn deps(&self) -> Vec<ConfiguredTargetLabel> {
        let mut deps = Vec::new();
        for value in self.values.values() {
            value.traverse_deps(&mut |label| deps.push(label.dupe()));
        }
        deps
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mason_core::configuration::ConfigurationData;
    use mason_core::target::label::TargetLabel;
    use starlark_map::ordered_map::OrderedMap;

    use super::ConstructorArg;
    use crate::attrs::configured_attr::ConfiguredAttr;
    use crate::attrs::spec::AttributeSpec;
    use crate::rule::RuleSchema;

    #[test]
    fn test_get_and_deps() {
        let rule = Arc::new(RuleSchema::new(
            "example_rule".to_owned(),
            AttributeSpec::from(Vec::new()).unwrap(),
        ));
        let cfg = ConfigurationData::testing_new();
        let mut values = OrderedMap::new();
        values.insert(
            "deps".to_owned(),
            ConfiguredAttr::List(Box::new([ConfiguredAttr::Dep(
                TargetLabel::testing_parse("root//a:b").configure(cfg),
            )])),
        );
        let arg = ConstructorArg::new(rule, values);

        assert!(arg.get("deps").is_some());
        assert!(arg.get("srcs").is_none());
        assert_eq!(1, arg.deps().len());
        assert_eq!("root//a:b", arg.deps()[0].label().to_string());
    }
}
