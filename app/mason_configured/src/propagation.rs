/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Propagation of a bundle's resolved platform flavor to its dependency
//! edges.

use dupe::Dupe;
use itertools::Itertools;
use mason_core::flavors::Flavor;
use mason_core::flavors::domain::FlavorDomain;
use mason_core::target::label::TargetLabel;
use once_cell::sync::Lazy;

use crate::platform::IPHONEOS_PREFIX;
use crate::platform::PlatformDescriptor;
use crate::platform::WATCHOS_PREFIX;
use crate::platform::is_simulator;

/// Tag a dependency carries to mark it as a watch companion app. Replaced by
/// a concrete watch platform flavor during propagation.
pub static WATCH: Lazy<Flavor> = Lazy::new(|| Flavor::new("watch").unwrap());

static WATCH_SIMULATOR: Lazy<Flavor> = Lazy::new(|| Flavor::new("watchsimulator-i386").unwrap());
static WATCH_DEVICE: Lazy<Flavor> = Lazy::new(|| Flavor::new("watchos-armv7k").unwrap());

/// The watch platform matching the surrounding build's platform: simulator
/// builds get the watch simulator, device builds targeting a phone or watch
/// get the watch device, and anything else (e.g. macosx) keeps the
/// surrounding platform's own name.
pub fn watch_companion_flavor(platform_name: &str) -> anyhow::Result<Flavor> {
    if is_simulator(platform_name) {
        Ok(*WATCH_SIMULATOR)
    } else if platform_name.starts_with(IPHONEOS_PREFIX)
        || platform_name.starts_with(WATCHOS_PREFIX)
    {
        Ok(*WATCH_DEVICE)
    } else {
        Flavor::new(platform_name)
    }
}

/// Propagate `platform_flavor` to `deps`, the way a bundle pushes its
/// platform down to the things it packages:
/// - the binary dep is excluded (the bundle flavors it separately);
/// - deps already carrying a platform-domain flavor are kept untouched;
/// - deps tagged `watch` have the tag replaced by the matching watch
///   platform flavor;
/// - every other dep gets `platform_flavor` added.
///
/// Pure function of its inputs; result order is platform-flavored deps,
/// then watch remaps, then the rest, with duplicates collapsed.
pub fn propagate_platform_flavors(
    platform_domain: &FlavorDomain<PlatformDescriptor>,
    platform_flavor: Flavor,
    binary: &TargetLabel,
    deps: &[TargetLabel],
) -> anyhow::Result<Vec<TargetLabel>> {
    let watch_flavor = watch_companion_flavor(platform_flavor.as_str())?;

    let deps_excluding_binary = deps.iter().filter(|dep| *dep != binary);

    let (with_platform, without_platform): (Vec<&TargetLabel>, Vec<&TargetLabel>) =
        deps_excluding_binary.partition(|dep| platform_domain.contains_any_of(dep.flavors()));

    let watch_deps = without_platform
        .iter()
        .filter(|dep| dep.flavors().contains(*WATCH))
        .map(|dep| dep.without_flavors([*WATCH]).with_added_flavors([watch_flavor]));

    let propagated = without_platform
        .iter()
        .filter(|dep| !dep.flavors().contains(*WATCH))
        .map(|dep| dep.with_added_flavors([platform_flavor]));

    Ok(with_platform
        .iter()
        .map(|dep| (*dep).dupe())
        .chain(watch_deps)
        .chain(propagated)
        .unique()
        .collect())
}
