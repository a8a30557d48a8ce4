/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use dupe::Dupe;

use crate::configuration::ConfigurationData;
use crate::flavors::Flavor;
use crate::flavors::FlavorSet;
use crate::package::PackageLabel;
use crate::target::name::TargetName;

/// A 'TargetLabel' is the unique identity of one buildable variant of a
/// declared rule: cell, package, target name and flavor set. Two labels that
/// differ only in flavors are distinct identities representing build variants
/// of the same declaration.
///
/// Flavor-set manipulation returns new labels; labels are never mutated, which
/// is what makes them usable as memoization keys across the whole build.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct TargetLabel {
    pkg: PackageLabel,
    name: TargetName,
    flavors: FlavorSet,
}

impl TargetLabel {
    pub fn new(pkg: PackageLabel, name: TargetName) -> TargetLabel {
        TargetLabel {
            pkg,
            name,
            flavors: FlavorSet::empty(),
        }
    }

    pub fn with_flavors(pkg: PackageLabel, name: TargetName, flavors: FlavorSet) -> TargetLabel {
        TargetLabel { pkg, name, flavors }
    }

    /// Parses `cell//package:name#flavors`; for tests.
    pub fn testing_parse(label: &str) -> TargetLabel {
        let (label, flavors) = match label.split_once('#') {
            Some((label, flavors)) => (label, FlavorSet::testing_parse(flavors)),
            None => (label, FlavorSet::empty()),
        };
        let (pkg, name) = label.rsplit_once(':').unwrap();
        TargetLabel::with_flavors(
            PackageLabel::testing_parse(pkg),
            TargetName::testing_new(name),
            flavors,
        )
    }

    pub fn pkg(&self) -> &PackageLabel {
        &self.pkg
    }

    pub fn name(&self) -> &TargetName {
        &self.name
    }

    pub fn flavors(&self) -> &FlavorSet {
        &self.flavors
    }

    /// The same declared rule with a different flavor set.
    pub fn with_flavor_set(&self, flavors: FlavorSet) -> TargetLabel {
        TargetLabel {
            pkg: self.pkg.dupe(),
            name: self.name.dupe(),
            flavors,
        }
    }

    pub fn with_added_flavors(&self, flavors: impl IntoIterator<Item = Flavor>) -> TargetLabel {
        self.with_flavor_set(self.flavors.with_added(flavors))
    }

    pub fn without_flavors(&self, flavors: impl IntoIterator<Item = Flavor>) -> TargetLabel {
        self.with_flavor_set(self.flavors.without(flavors))
    }

    /// This declaration's identity with no flavors, i.e. the form the rule was
    /// recorded under in the build file.
    pub fn unflavored(&self) -> TargetLabel {
        self.with_flavor_set(FlavorSet::empty())
    }

    pub fn configure(&self, cfg: ConfigurationData) -> ConfiguredTargetLabel {
        ConfiguredTargetLabel {
            label: self.dupe(),
            cfg,
        }
    }
}

impl Display for TargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pkg, self.name)?;
        if !self.flavors.is_empty() {
            write!(f, "#{}", self.flavors)?;
        }
        Ok(())
    }
}

/// A 'TargetLabel' with a configuration applied, the identity under which the
/// rule node is actually constructed.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct ConfiguredTargetLabel {
    label: TargetLabel,
    cfg: ConfigurationData,
}

impl ConfiguredTargetLabel {
    pub fn label(&self) -> &TargetLabel {
        &self.label
    }

    pub fn cfg(&self) -> ConfigurationData {
        self.cfg
    }
}

impl Display for ConfiguredTargetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::TargetLabel;
    use crate::flavors::Flavor;

    #[test]
    fn test_display() {
        let label = TargetLabel::testing_parse("root//foo/bar:baz");
        assert_eq!("root//foo/bar:baz", label.to_string());
        let flavored = label.with_added_flavors([
            Flavor::testing_new("strip"),
            Flavor::testing_new("iphoneos-x86_64"),
        ]);
        assert_eq!("root//foo/bar:baz#iphoneos-x86_64,strip", flavored.to_string());
    }

    #[test]
    fn test_flavored_identity_is_distinct() {
        let plain = TargetLabel::testing_parse("root//a:b");
        let flavored = plain.with_added_flavors([Flavor::testing_new("x")]);
        assert_ne!(plain, flavored);
        assert_eq!(plain, flavored.unflavored());
    }
}
