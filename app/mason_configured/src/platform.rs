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
use mason_core::flavors::Flavor;
use mason_core::flavors::domain::FlavorDomain;
use mason_core::target::label::TargetLabel;

/// Platform-name prefixes that denote simulator builds.
const SIMULATOR_PLATFORM_PREFIXES: &[&str] =
    &["iphonesimulator", "watchsimulator", "appletvsimulator"];

pub const IPHONEOS_PREFIX: &str = "iphoneos";
pub const WATCHOS_PREFIX: &str = "watchos";

pub fn is_simulator(platform_name: &str) -> bool {
    SIMULATOR_PLATFORM_PREFIXES
        .iter()
        .any(|prefix| platform_name.starts_with(prefix))
}

/// One concrete platform a platform-domain flavor translates to. The flavor
/// name carries the platform and architecture, e.g. `iphoneos-arm64`.
#[derive(Clone, Dupe, Copy, Debug, Eq, PartialEq, Allocative)]
pub struct PlatformDescriptor {
    flavor: Flavor,
}

impl PlatformDescriptor {
    pub fn new(flavor: Flavor) -> PlatformDescriptor {
        PlatformDescriptor { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn name(&self) -> &'static str {
        self.flavor.as_str()
    }

    pub fn is_simulator(&self) -> bool {
        is_simulator(self.name())
    }
}

/// A multi-architecture ("fat") build: a target carrying more than one
/// platform-domain flavor, to be built once per platform and stitched
/// together. Wherever a single platform is needed, the representative
/// platform stands in for the whole set.
#[derive(Clone, Dupe, Copy, Debug, Eq, PartialEq, Allocative)]
pub struct FatBinaryInfo {
    representative: Flavor,
}

impl FatBinaryInfo {
    /// Detect a fat build on `target`: two or more platform flavors. The
    /// representative is the first in the flavor set's deterministic order.
    pub fn create(
        domain: &FlavorDomain<PlatformDescriptor>,
        target: &TargetLabel,
    ) -> Option<FatBinaryInfo> {
        let platforms: Vec<Flavor> = target
            .flavors()
            .iter()
            .filter(|f| domain.contains(*f))
            .collect();
        match platforms.as_slice() {
            [] | [_] => None,
            [first, ..] => Some(FatBinaryInfo {
                representative: *first,
            }),
        }
    }

    pub fn representative_platform(&self) -> Flavor {
        self.representative
    }
}

/// Select the single platform a resolution is performed under. Priority: an
/// explicit fat-binary descriptor's representative, else the target's own
/// platform-domain flavor, else the configured default platform.
pub fn representative_platform(
    domain: &FlavorDomain<PlatformDescriptor>,
    default_platform: Flavor,
    fat_binary_info: Option<&FatBinaryInfo>,
    target: &TargetLabel,
) -> anyhow::Result<Flavor> {
    if let Some(fat) = fat_binary_info {
        return Ok(fat.representative_platform());
    }
    match domain.get_flavor(target.flavors())? {
        Some(flavor) => Ok(flavor),
        None => Ok(default_platform),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use mason_core::flavors::Flavor;
    use mason_core::flavors::domain::FlavorDomain;
    use starlark_map::ordered_map::OrderedMap;

    use super::PlatformDescriptor;

    pub(crate) fn platform_domain(names: &[&str]) -> FlavorDomain<PlatformDescriptor> {
        let mut translation = OrderedMap::new();
        for name in names {
            let flavor = Flavor::testing_new(name);
            translation.insert(flavor, PlatformDescriptor::new(flavor));
        }
        FlavorDomain::new("platform".to_owned(), translation, None).unwrap()
    }
}
