/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_core::flavors::Flavor;
use mason_core::flavors::domain::FlavorDomain;
use once_cell::sync::Lazy;
use starlark_map::ordered_map::OrderedMap;

static INCLUDE_FRAMEWORKS: Lazy<Flavor> =
    Lazy::new(|| Flavor::new("include-frameworks").unwrap());
static NO_INCLUDE_FRAMEWORKS: Lazy<Flavor> =
    Lazy::new(|| Flavor::new("no-include-frameworks").unwrap());

pub const INCLUDE_FRAMEWORKS_DOMAIN_NAME: &str = "include frameworks";

/// Whether a bundle embeds its framework dependencies inside itself. An
/// identity with neither flavor selected completes to `no-include-frameworks`;
/// only an outermost bundle is requested with `include-frameworks`.
pub fn include_frameworks_domain() -> FlavorDomain<bool> {
    let mut translation = OrderedMap::new();
    translation.insert(*INCLUDE_FRAMEWORKS, true);
    translation.insert(*NO_INCLUDE_FRAMEWORKS, false);
    // Both flavors above are members by construction.
    FlavorDomain::new(
        INCLUDE_FRAMEWORKS_DOMAIN_NAME.to_owned(),
        translation,
        Some(*NO_INCLUDE_FRAMEWORKS),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use mason_core::target::label::TargetLabel;

    use super::include_frameworks_domain;

    #[test]
    fn test_domain() {
        let domain = include_frameworks_domain();
        assert_eq!(
            Some(true),
            domain
                .get(TargetLabel::testing_parse("root//a:b#include-frameworks").flavors())
                .unwrap()
                .map(|(_, v)| *v)
        );
        assert_eq!(
            Some(false),
            domain
                .get(TargetLabel::testing_parse("root//a:b#no-include-frameworks").flavors())
                .unwrap()
                .map(|(_, v)| *v)
        );
        assert_eq!(
            Some("no-include-frameworks"),
            domain.default_flavor().map(|f| f.as_str())
        );
    }
}
