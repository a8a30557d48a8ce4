/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;
use dupe::Dupe;
use mason_core::package::PackageLabel;
use starlark_map::ordered_map::OrderedMap;
use starlark_map::small_map::SmallMap;

use crate::values::RawValue;

#[derive(Debug, thiserror::Error)]
enum ParseContextError {
    #[error("Cannot register rule `{0}:{1}` of type `{2}` again")]
    DuplicateTargetName(PackageLabel, String, String),
    #[error("Rules in package `{0}` must provide a `name` attribute of type string")]
    MissingName(PackageLabel),
}

/// A rule invocation captured from a build file: everything is still in the
/// raw declaration-language shape, waiting for the package to be resolved
/// before any coercion happens.
#[derive(Debug, Clone, Eq, PartialEq, Allocative)]
pub struct RecordedRule {
    pub package: PackageLabel,
    pub rule_type: String,
    pub visibility: Vec<String>,
    pub within_view: Vec<String>,
    pub attrs: OrderedMap<String, RawValue>,
}

impl RecordedRule {
    pub fn new(
        package: PackageLabel,
        rule_type: String,
        visibility: Vec<String>,
        within_view: Vec<String>,
        attrs: OrderedMap<String, RawValue>,
    ) -> RecordedRule {
        RecordedRule {
            package,
            rule_type,
            visibility,
            within_view,
            attrs,
        }
    }

    /// The declared target name, from the mandatory `name` attribute.
    pub fn target_name(&self) -> anyhow::Result<&str> {
        match self.attrs.get("name") {
            Some(RawValue::String(name)) => Ok(name),
            _ => Err(ParseContextError::MissingName(self.package.dupe()).into()),
        }
    }
}

/// Per-build-file recorder for rule invocations. One per package evaluation;
/// package evaluations never share a context, so files can be evaluated
/// concurrently.
#[derive(Debug, Allocative)]
pub struct ParseContext {
    package: PackageLabel,
    rules: SmallMap<String, RecordedRule>,
}

impl ParseContext {
    pub fn new(package: PackageLabel) -> ParseContext {
        ParseContext {
            package,
            rules: SmallMap::new(),
        }
    }

    pub fn package(&self) -> &PackageLabel {
        &self.package
    }

    pub fn record_rule(&mut self, rule: RecordedRule) -> anyhow::Result<()> {
        let name = rule.target_name()?.to_owned();
        if self.rules.contains_key(name.as_str()) {
            return Err(ParseContextError::DuplicateTargetName(
                self.package.dupe(),
                name,
                rule.rule_type,
            )
            .into());
        }
        tracing::debug!(
            "recorded rule `{}:{}` of type `{}`",
            self.package,
            name,
            rule.rule_type
        );
        self.rules.insert(name, rule);
        Ok(())
    }

    /// Consume the recorded rules once the file has finished evaluating, in
    /// declaration order.
    pub fn into_recorded_rules(self) -> Vec<RecordedRule> {
        self.rules.into_iter().map(|(_, rule)| rule).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use mason_core::package::PackageLabel;
    use starlark_map::ordered_map::OrderedMap;

    use super::ParseContext;
    use super::RecordedRule;
    use crate::values::RawValue;

    fn rule(name: &str, rule_type: &str) -> RecordedRule {
        let mut attrs = OrderedMap::new();
        attrs.insert("name".to_owned(), RawValue::String(name.to_owned()));
        RecordedRule::new(
            PackageLabel::testing_parse("root//pkg"),
            rule_type.to_owned(),
            Vec::new(),
            Vec::new(),
            attrs,
        )
    }

    #[test]
    fn test_records_in_order() {
        let mut ctx = ParseContext::new(PackageLabel::testing_parse("root//pkg"));
        ctx.record_rule(rule("b", "cxx_library")).unwrap();
        ctx.record_rule(rule("a", "cxx_library")).unwrap();
        let names: Vec<String> = ctx
            .into_recorded_rules()
            .iter()
            .map(|r| r.target_name().unwrap().to_owned())
            .collect();
        assert_eq!(vec!["b", "a"], names);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut ctx = ParseContext::new(PackageLabel::testing_parse("root//pkg"));
        ctx.record_rule(rule("a", "cxx_library")).unwrap();
        let err = ctx.record_rule(rule("a", "cxx_binary")).unwrap_err();
        assert!(err.to_string().contains("Cannot register rule"));
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut ctx = ParseContext::new(PackageLabel::testing_parse("root//pkg"));
        let nameless = RecordedRule::new(
            PackageLabel::testing_parse("root//pkg"),
            "cxx_library".to_owned(),
            Vec::new(),
            Vec::new(),
            OrderedMap::new(),
        );
        assert!(ctx.record_rule(nameless).is_err());
    }
}
