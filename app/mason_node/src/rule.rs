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
use starlark_map::small_map::SmallMap;

use crate::attrs::spec::AttributeSpec;

/// The documentation site targets rule pages by name under this prefix.
const DOC_URL_PREFIX: &str = "https://mason.build/rule/";

#[derive(Debug, thiserror::Error)]
enum RuleRegistryError {
    #[error("Rule `{0}` is already registered")]
    DuplicateRule(String),
    #[error("Unknown rule type `{0}`")]
    UnknownRule(String),
}

/// Everything known statically about one rule kind: its name and the
/// attributes targets of this kind may set. Registered once at startup and
/// shared by every declaration that uses it.
#[derive(Debug, Eq, PartialEq, Allocative)]
pub struct RuleSchema {
    name: String,
    attributes: AttributeSpec,
}

impl RuleSchema {
    pub fn new(name: String, attributes: AttributeSpec) -> RuleSchema {
        RuleSchema { name, attributes }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &AttributeSpec {
        &self.attributes
    }

    /// The documentation page for this rule kind, appended to diagnostics
    /// about misdeclared targets.
    pub fn doc_url(&self) -> String {
        format!("{}{}", DOC_URL_PREFIX, self.name)
    }
}

/// The set of rule kinds known to the interpreter, keyed by name.
#[derive(Debug, Default, Allocative)]
pub struct RuleRegistry {
    rules: SmallMap<String, Arc<RuleSchema>>,
}

impl RuleRegistry {
    pub fn new() -> RuleRegistry {
        RuleRegistry::default()
    }

    pub fn register(&mut self, rule: Arc<RuleSchema>) -> anyhow::Result<()> {
        let name = rule.name().to_owned();
        if self.rules.insert(name.clone(), rule).is_some() {
            return Err(RuleRegistryError::DuplicateRule(name).into());
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> anyhow::Result<Arc<RuleSchema>> {
        match self.rules.get(name) {
            Some(rule) => Ok(rule.dupe()),
            None => Err(RuleRegistryError::UnknownRule(name.to_owned()).into()),
        }
    }

    pub fn rule_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.rules.keys().map(|name| name.as_str())
    }
}
