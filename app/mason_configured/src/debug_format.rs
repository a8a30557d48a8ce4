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
use once_cell::sync::Lazy;
use starlark_map::ordered_map::OrderedMap;

static DWARF_AND_DSYM: Lazy<Flavor> = Lazy::new(|| Flavor::new("dwarf-and-dsym").unwrap());
static DWARF: Lazy<Flavor> = Lazy::new(|| Flavor::new("dwarf").unwrap());
static NO_DEBUG: Lazy<Flavor> = Lazy::new(|| Flavor::new("no-debug").unwrap());

/// Flavor appended to a target to name its synthesized debug-symbol
/// companion.
static DSYM_COMPANION: Lazy<Flavor> = Lazy::new(|| Flavor::new("apple-dsym").unwrap());

pub const DEBUG_FORMAT_DOMAIN_NAME: &str = "debug format";

/// How debug information is carried for a built binary.
#[derive(Clone, Dupe, Copy, Debug, Eq, PartialEq, Hash, Allocative)]
pub enum AppleDebugFormat {
    /// Debug info stripped entirely.
    None,
    /// Debug info left embedded in the binary.
    Dwarf,
    /// Debug info extracted into a separate dSYM companion.
    DwarfAndDsym,
}

impl AppleDebugFormat {
    pub fn flavor(self) -> Flavor {
        match self {
            AppleDebugFormat::None => *NO_DEBUG,
            AppleDebugFormat::Dwarf => *DWARF,
            AppleDebugFormat::DwarfAndDsym => *DWARF_AND_DSYM,
        }
    }

    /// The debug-format flavor domain with `default` completing unflavored
    /// targets.
    pub fn domain(default: AppleDebugFormat) -> FlavorDomain<AppleDebugFormat> {
        let mut translation = OrderedMap::new();
        for format in [
            AppleDebugFormat::DwarfAndDsym,
            AppleDebugFormat::Dwarf,
            AppleDebugFormat::None,
        ] {
            translation.insert(format.flavor(), format);
        }
        // The three flavors above are members by construction.
        FlavorDomain::new(
            DEBUG_FORMAT_DOMAIN_NAME.to_owned(),
            translation,
            Some(default.flavor()),
        )
        .unwrap()
    }
}

/// The synthesized dSYM companion for `target`, if one applies: only the
/// dwarf-and-dsym format produces one, and only when the primary build
/// artifact exists. Absence of the artifact skips synthesis; nothing is
/// retried later.
pub fn dsym_companion(
    target: &TargetLabel,
    format: AppleDebugFormat,
    primary_artifact_present: bool,
) -> Option<TargetLabel> {
    if format != AppleDebugFormat::DwarfAndDsym || !primary_artifact_present {
        return None;
    }
    Some(target.with_added_flavors([*DSYM_COMPANION]))
}

#[cfg(test)]
mod tests {
    use mason_core::target::label::TargetLabel;

    use super::AppleDebugFormat;
    use super::dsym_companion;

    #[test]
    fn test_domain() {
        let domain = AppleDebugFormat::domain(AppleDebugFormat::DwarfAndDsym);
        assert_eq!(
            Some(AppleDebugFormat::Dwarf.flavor()),
            domain
                .get_flavor(TargetLabel::testing_parse("root//a:b#dwarf,strip").flavors())
                .unwrap()
        );
        assert_eq!(Some(AppleDebugFormat::DwarfAndDsym.flavor()), domain.default_flavor());
    }

    #[test]
    fn test_dsym_gating() {
        let target = TargetLabel::testing_parse("root//a:b#dwarf-and-dsym,iphoneos-arm64");
        assert_eq!(
            Some(TargetLabel::testing_parse(
                "root//a:b#apple-dsym,dwarf-and-dsym,iphoneos-arm64"
            )),
            dsym_companion(&target, AppleDebugFormat::DwarfAndDsym, true)
        );
        // No primary artifact: skip synthesis.
        assert_eq!(
            None,
            dsym_companion(&target, AppleDebugFormat::DwarfAndDsym, false)
        );
        // Other formats never synthesize a companion.
        assert_eq!(None, dsym_companion(&target, AppleDebugFormat::Dwarf, true));
        assert_eq!(None, dsym_companion(&target, AppleDebugFormat::None, true));
    }
}
