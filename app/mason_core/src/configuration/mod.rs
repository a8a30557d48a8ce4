/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use dupe::Dupe;
use internment::Intern;

#[derive(Debug, thiserror::Error)]
enum ConfigurationError {
    #[error("Configuration name must be non-empty")]
    Empty,
}

/// The identity of a build configuration (a target platform, or the host
/// platform for tool dependencies). Attribute coercion is independent of
/// configuration; applying one of these to coerced values is what produces
/// the final, configured attribute values.
///
/// Interned: equality and hashing are pointer-sized.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Allocative)]
pub struct ConfigurationData(#[allocative(skip)] Intern<String>);

impl Dupe for ConfigurationData {}

impl ConfigurationData {
    pub fn from_platform(name: String) -> anyhow::Result<ConfigurationData> {
        if name.is_empty() {
            return Err(ConfigurationError::Empty.into());
        }
        Ok(ConfigurationData(Intern::new(name)))
    }

    /// The placeholder configuration attached before a real one is chosen.
    pub fn unbound() -> ConfigurationData {
        ConfigurationData(Intern::new("<unbound>".to_owned()))
    }

    pub fn testing_new() -> ConfigurationData {
        ConfigurationData(Intern::new("cfg_for//:testing".to_owned()))
    }

    pub fn name(&self) -> &'static str {
        self.0.as_ref().as_str()
    }
}

impl Display for ConfigurationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.name(), f)
    }
}

impl PartialOrd for ConfigurationData {
    fn partial_cmp(&self, other: &ConfigurationData) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ConfigurationData {
    fn cmp(&self, other: &ConfigurationData) -> Ordering {
        self.name().cmp(other.name())
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigurationData;

    #[test]
    fn test_identity() {
        let a = ConfigurationData::from_platform("linux-x86_64".to_owned()).unwrap();
        let b = ConfigurationData::from_platform("linux-x86_64".to_owned()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ConfigurationData::unbound());
    }
}
