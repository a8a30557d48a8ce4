/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Rule functions are what a build file calls under a rule kind's name, e.g.
//! `cxx_library(...)`. All they do is validate the passed keyword arguments
//! against the rule schema and record them in the `ParseContext`; no value is
//! produced for the evaluator.

use std::sync::Arc;

use dupe::Dupe;
use itertools::Itertools;
use starlark_map::ordered_map::OrderedMap;

use mason_node::rule::RuleSchema;

use crate::parser::context::ParseContext;
use crate::parser::context::RecordedRule;
use crate::values::RawValue;

const VISIBILITY: &str = "visibility";
const WITHIN_VIEW: &str = "within_view";

#[derive(Debug, thiserror::Error)]
enum RuleFunctionError {
    #[error("{0} is not a recognized attribute")]
    UnrecognizedAttribute(String),
    #[error("argument for {0} must be a list of string, it is {1}")]
    NotAListOfStrings(String, RawValue),
    #[error("{rule} requires {missing} but they are not provided.\nNeed help? See {doc_url}")]
    MissingRequiredAttributes {
        rule: String,
        missing: String,
        doc_url: String,
    },
    #[error("Rule functions fully evaluate arguments; positional arguments should not reach {0}")]
    UnexpectedPositionalArguments(String),
}

pub struct RuleFunctionFactory;

impl RuleFunctionFactory {
    /// Create the build-file callable for `rule`.
    pub fn create(rule: Arc<RuleSchema>) -> RuleFunction {
        RuleFunction { rule }
    }
}

pub struct RuleFunction {
    rule: Arc<RuleSchema>,
}

impl RuleFunction {
    pub fn name(&self) -> &str {
        self.rule.name()
    }

    /// Handle one invocation from a build file. Validated keyword arguments
    /// are recorded in `ctx`; the call yields nothing to the evaluator.
    pub fn invoke(
        &self,
        ctx: &mut ParseContext,
        positional: &[RawValue],
        kwargs: OrderedMap<String, RawValue>,
    ) -> anyhow::Result<()> {
        // sanity check; the evaluator has already validated the signature
        if !positional.is_empty() {
            return Err(RuleFunctionError::UnexpectedPositionalArguments(
                self.rule.name().to_owned(),
            )
            .into());
        }

        let rule = self.populate_attributes(ctx, kwargs)?;
        ctx.record_rule(rule)
    }

    fn populate_attributes(
        &self,
        ctx: &ParseContext,
        kwargs: OrderedMap<String, RawValue>,
    ) -> anyhow::Result<RecordedRule> {
        let mut visibility = Vec::new();
        let mut within_view = Vec::new();
        let mut attrs = OrderedMap::with_capacity(kwargs.len());

        // The required check runs against the keys as passed: an explicit
        // None satisfies it here and fails attribute coercion later instead.
        let passed: Vec<String> = kwargs.keys().cloned().collect();

        for (name, value) in kwargs {
            if name == VISIBILITY {
                visibility = to_list_of_strings(&name, value)?;
                continue;
            }
            if name == WITHIN_VIEW {
                within_view = to_list_of_strings(&name, value)?;
                continue;
            }
            if self.rule.attributes().attribute(&name).is_none() {
                return Err(RuleFunctionError::UnrecognizedAttribute(name).into());
            }
            // Omitted and None-valued attributes both fall back to schema
            // defaults later.
            if value.is_none() {
                continue;
            }
            attrs.insert(name, value);
        }

        self.check_required_attributes(&passed)?;
        Ok(RecordedRule::new(
            ctx.package().dupe(),
            self.rule.name().to_owned(),
            visibility,
            within_view,
            attrs,
        ))
    }

    fn check_required_attributes(&self, passed: &[String]) -> anyhow::Result<()> {
        let missing = self
            .rule
            .attributes()
            .attr_specs()
            .filter(|(name, _, attr)| !attr.is_optional() && !passed.iter().any(|p| p == name))
            .map(|(name, _, _)| name)
            .sorted()
            .collect::<Vec<_>>();
        if missing.is_empty() {
            return Ok(());
        }
        Err(RuleFunctionError::MissingRequiredAttributes {
            rule: self.rule.name().to_owned(),
            missing: missing.iter().join(" and "),
            doc_url: self.rule.doc_url(),
        }
        .into())
    }
}

fn to_list_of_strings(attr_name: &str, value: RawValue) -> anyhow::Result<Vec<String>> {
    match &value {
        RawValue::None => Ok(Vec::new()),
        RawValue::List(items) => items
            .iter()
            .map(|item| match item {
                RawValue::String(s) => Ok(s.clone()),
                _ => Err(
                    RuleFunctionError::NotAListOfStrings(attr_name.to_owned(), value.clone())
                        .into(),
                ),
            })
            .collect(),
        _ => Err(RuleFunctionError::NotAListOfStrings(attr_name.to_owned(), value).into()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mason_core::package::PackageLabel;
    use mason_node::attrs::attr::Attribute;
    use mason_node::attrs::attr_type::AttrType;
    use mason_node::attrs::coerced_attr::CoercedAttr;
    use mason_node::attrs::spec::AttributeSpec;
    use mason_node::rule::RuleSchema;
    use starlark_map::ordered_map::OrderedMap;

    use super::RuleFunction;
    use super::RuleFunctionFactory;
    use crate::parser::context::ParseContext;
    use crate::values::RawValue;

    fn test_function() -> RuleFunction {
        RuleFunctionFactory::create(Arc::new(RuleSchema::new(
            "example_library".to_owned(),
            AttributeSpec::from(vec![
                ("name".to_owned(), Attribute::required(AttrType::string())),
                ("bar".to_owned(), Attribute::required(AttrType::int())),
                (
                    "srcs".to_owned(),
                    Attribute::with_default(
                        AttrType::list(AttrType::source()),
                        CoercedAttr::List(Box::new([])),
                    ),
                ),
            ])
            .unwrap(),
        )))
    }

    fn kwargs(entries: Vec<(&str, RawValue)>) -> OrderedMap<String, RawValue> {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    fn ctx() -> ParseContext {
        ParseContext::new(PackageLabel::testing_parse("root//pkg"))
    }

    #[test]
    fn test_records_valid_rule() {
        let function = test_function();
        let mut ctx = ctx();
        function
            .invoke(
                &mut ctx,
                &[],
                kwargs(vec![
                    ("name".into(), RawValue::String("foo".to_owned())),
                    ("bar".into(), RawValue::Int(3)),
                    (
                        "visibility".into(),
                        RawValue::List(vec![RawValue::String("PUBLIC".to_owned())]),
                    ),
                ]),
            )
            .unwrap();
        let rules = ctx.into_recorded_rules();
        assert_eq!(1, rules.len());
        assert_eq!("foo", rules[0].target_name().unwrap());
        assert_eq!(vec!["PUBLIC"], rules[0].visibility);
        // visibility is diverted, not a generic attribute
        assert!(!rules[0].attrs.contains_key("visibility"));
    }

    #[test]
    fn test_unrecognized_attribute() {
        let function = test_function();
        let err = function
            .invoke(
                &mut ctx(),
                &[],
                kwargs(vec![
                    ("name".into(), RawValue::String("foo".to_owned())),
                    ("bar".into(), RawValue::Int(3)),
                    ("bogus".into(), RawValue::Int(1)),
                ]),
            )
            .unwrap_err();
        assert_eq!("bogus is not a recognized attribute", err.to_string());
    }

    #[test]
    fn test_missing_required_attributes_sorted() {
        let function = test_function();
        let err = function.invoke(&mut ctx(), &[], kwargs(vec![])).unwrap_err();
        assert_eq!(
            "example_library requires bar and name but they are not provided.\n\
             Need help? See https://mason.build/rule/example_library",
            err.to_string()
        );
    }

    #[test]
    fn test_none_values_are_skipped() {
        let function = test_function();
        let mut ctx = ctx();
        function
            .invoke(
                &mut ctx,
                &[],
                kwargs(vec![
                    ("name".into(), RawValue::String("foo".to_owned())),
                    ("bar".into(), RawValue::Int(3)),
                    ("srcs".into(), RawValue::None),
                ]),
            )
            .unwrap();
        let rules = ctx.into_recorded_rules();
        assert!(!rules[0].attrs.contains_key("srcs"));
    }

    #[test]
    fn test_none_for_required_passes_the_binder() {
        // An explicit None counts as passed here; coercion rejects it later
        // when no default can fill the attribute in.
        let function = test_function();
        let mut ctx = ctx();
        function
            .invoke(
                &mut ctx,
                &[],
                kwargs(vec![
                    ("name".into(), RawValue::String("foo".to_owned())),
                    ("bar".into(), RawValue::None),
                ]),
            )
            .unwrap();
        assert!(!ctx.into_recorded_rules()[0].attrs.contains_key("bar"));
    }

    #[test]
    fn test_bad_visibility_shape() {
        let function = test_function();
        let err = function
            .invoke(
                &mut ctx(),
                &[],
                kwargs(vec![
                    ("name".into(), RawValue::String("foo".to_owned())),
                    ("bar".into(), RawValue::Int(3)),
                    ("visibility".into(), RawValue::String("PUBLIC".to_owned())),
                ]),
            )
            .unwrap_err();
        assert_eq!(
            "argument for visibility must be a list of string, it is \"PUBLIC\"",
            err.to_string()
        );
    }

    #[test]
    fn test_positional_arguments_are_internal_error() {
        let function = test_function();
        assert!(
            function
                .invoke(&mut ctx(), &[RawValue::Int(1)], kwargs(vec![]))
                .is_err()
        );
    }
}
