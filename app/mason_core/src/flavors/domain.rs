/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;
use itertools::Itertools;
use starlark_map::ordered_map::OrderedMap;

use crate::flavors::Flavor;
use crate::flavors::FlavorSet;

#[derive(Debug, thiserror::Error)]
enum FlavorDomainError {
    #[error("In domain `{0}`: default flavor `{1}` is not a member of the domain")]
    DefaultNotMember(String, Flavor),
    #[error("Multiple {0} flavors: {}", .1.iter().join(", "))]
    MultipleFlavors(String, Vec<Flavor>),
    #[error("flavor `{0}` belongs to both domain `{1}` and domain `{2}`")]
    OverlappingDomains(Flavor, String, String),
}

/// A named set of mutually exclusive flavors, each translating to a
/// domain-specific value `T` (e.g. the platform flavor domain maps each
/// platform flavor to its platform descriptor). A domain may carry a default
/// flavor used to complete targets that do not select one explicitly.
#[derive(Debug, Clone, Allocative)]
pub struct FlavorDomain<T> {
    name: String,
    translation: OrderedMap<Flavor, T>,
    default: Option<Flavor>,
}

impl<T> FlavorDomain<T> {
    pub fn new(
        name: String,
        translation: OrderedMap<Flavor, T>,
        default: Option<Flavor>,
    ) -> anyhow::Result<FlavorDomain<T>> {
        if let Some(default) = default {
            if !translation.contains_key(&default) {
                return Err(FlavorDomainError::DefaultNotMember(name, default).into());
            }
        }
        Ok(FlavorDomain {
            name,
            translation,
            default,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, flavor: Flavor) -> bool {
        self.translation.contains_key(&flavor)
    }

    pub fn contains_any_of(&self, flavors: &FlavorSet) -> bool {
        flavors.iter().any(|f| self.contains(f))
    }

    pub fn flavors(&self) -> impl Iterator<Item = Flavor> + '_ {
        self.translation.keys().copied()
    }

    pub fn default_flavor(&self) -> Option<Flavor> {
        self.default
    }

    /// The unique flavor of this domain present in `flavors`, if any. A set
    /// carrying more than one flavor of the domain is a configuration error.
    pub fn get_flavor(&self, flavors: &FlavorSet) -> anyhow::Result<Option<Flavor>> {
        let members: Vec<Flavor> = flavors.iter().filter(|f| self.contains(*f)).collect();
        match members.as_slice() {
            [] => Ok(None),
            [flavor] => Ok(Some(*flavor)),
            _ => Err(FlavorDomainError::MultipleFlavors(self.name.clone(), members).into()),
        }
    }

    pub fn get_value(&self, flavor: Flavor) -> Option<&T> {
        self.translation.get(&flavor)
    }

    /// Like [`get_flavor`](Self::get_flavor), but also translates the flavor.
    pub fn get(&self, flavors: &FlavorSet) -> anyhow::Result<Option<(Flavor, &T)>> {
        match self.get_flavor(flavors)? {
            None => Ok(None),
            Some(flavor) => {
                // Membership was established by get_flavor.
                let value = self.translation.get(&flavor).unwrap();
                Ok(Some((flavor, value)))
            }
        }
    }
}

/// The domain operations the variant resolver needs, independent of the
/// domain's value type. Lets heterogeneous domains (platforms, debug formats,
/// linkage, ...) participate in one completion pass.
pub trait FlavorDomainMembership {
    fn name(&self) -> &str;

    fn contains(&self, flavor: Flavor) -> bool;

    fn default_flavor(&self) -> Option<Flavor>;

    /// The unique flavor of this domain in `flavors`, erroring on ambiguity.
    fn flavor_in(&self, flavors: &FlavorSet) -> anyhow::Result<Option<Flavor>>;

    fn member_flavors(&self) -> Vec<Flavor>;
}

impl<T> FlavorDomainMembership for FlavorDomain<T> {
    fn name(&self) -> &str {
        FlavorDomain::name(self)
    }

    fn contains(&self, flavor: Flavor) -> bool {
        FlavorDomain::contains(self, flavor)
    }

    fn default_flavor(&self) -> Option<Flavor> {
        FlavorDomain::default_flavor(self)
    }

    fn flavor_in(&self, flavors: &FlavorSet) -> anyhow::Result<Option<Flavor>> {
        self.get_flavor(flavors)
    }

    fn member_flavors(&self) -> Vec<Flavor> {
        self.flavors().collect()
    }
}

/// Any single resolution decision requires that a flavor belong to at most one
/// of the domains involved. Validated once when the domain set is assembled.
pub fn check_domains_disjoint(domains: &[&dyn FlavorDomainMembership]) -> anyhow::Result<()> {
    for (i, a) in domains.iter().enumerate() {
        for b in &domains[i + 1..] {
            for flavor in a.member_flavors() {
                if b.contains(flavor) {
                    return Err(FlavorDomainError::OverlappingDomains(
                        flavor,
                        a.name().to_owned(),
                        b.name().to_owned(),
                    )
                    .into());
                }
            }
        }
    }
    Ok(())
}
