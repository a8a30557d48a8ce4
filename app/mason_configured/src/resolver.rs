/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use dupe::Dupe;
use mason_core::flavors::Flavor;
use mason_core::flavors::domain::FlavorDomain;
use mason_core::flavors::domain::FlavorDomainMembership;
use mason_core::flavors::domain::check_domains_disjoint;
use mason_core::target::label::TargetLabel;

use crate::completion::complete_flavor_domains;
use crate::debug_format::AppleDebugFormat;
use crate::debug_format::dsym_companion;
use crate::frameworks::include_frameworks_domain;
use crate::outcome::ResolutionOutcome;
use crate::platform::FatBinaryInfo;
use crate::platform::PlatformDescriptor;
use crate::platform::representative_platform;
use crate::propagation::propagate_platform_flavors;

#[derive(Debug, thiserror::Error)]
enum ResolverError {
    #[error("default platform `{0}` is not a member of the platform domain")]
    DefaultPlatformNotMember(Flavor),
}

/// One request to resolve a concrete target variant: the requested identity,
/// its declared deps, which dep is the binary (excluded from flavor
/// propagation), and whether the primary artifact exists for dSYM gating.
#[derive(Debug, Clone)]
pub struct VariantRequest {
    pub target: TargetLabel,
    pub deps: Vec<TargetLabel>,
    pub binary: TargetLabel,
    pub primary_artifact_present: bool,
}

/// A fully resolved variant, ready for rule construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResolvedVariant {
    pub target: TargetLabel,
    pub platform_flavor: Flavor,
    pub debug_format: AppleDebugFormat,
    pub include_frameworks: bool,
    pub deps: Vec<TargetLabel>,
    pub dsym_companion: Option<TargetLabel>,
}

/// Applies the flavor-domain algebra to one requested target: completes
/// missing domain flavors via redirects, selects the representative platform,
/// propagates platform flavors to deps, and synthesizes the dSYM companion.
/// Every step is a pure function of the request, so results for one identity
/// can be memoized and shared by concurrent resolution requests.
pub struct VariantResolver {
    platform_domain: FlavorDomain<PlatformDescriptor>,
    default_platform: Flavor,
    debug_domain: FlavorDomain<AppleDebugFormat>,
    default_debug_format: AppleDebugFormat,
    frameworks_domain: FlavorDomain<bool>,
}

impl VariantResolver {
    pub fn new(
        platform_domain: FlavorDomain<PlatformDescriptor>,
        default_platform: Flavor,
        default_debug_format: AppleDebugFormat,
    ) -> anyhow::Result<VariantResolver> {
        if !platform_domain.contains(default_platform) {
            return Err(ResolverError::DefaultPlatformNotMember(default_platform).into());
        }
        let debug_domain = AppleDebugFormat::domain(default_debug_format);
        let frameworks_domain = include_frameworks_domain();
        // Disjointness is validated once here, not per resolution.
        check_domains_disjoint(&[&platform_domain, &debug_domain, &frameworks_domain])?;
        Ok(VariantResolver {
            platform_domain,
            default_platform,
            debug_domain,
            default_debug_format,
            frameworks_domain,
        })
    }

    pub fn resolve(
        &self,
        request: &VariantRequest,
    ) -> anyhow::Result<ResolutionOutcome<ResolvedVariant>> {
        // Step 1: domain completion. An incomplete target is satisfied by
        // redirecting to the sibling with the default appended; the caller
        // re-enters resolution under the new identity. The debug-format
        // domain completes before the include-frameworks domain.
        let completion_domains: [&dyn FlavorDomainMembership; 2] =
            [&self.debug_domain, &self.frameworks_domain];
        if let ResolutionOutcome::Redirect(next) =
            complete_flavor_domains(&request.target, &completion_domains)?
        {
            tracing::debug!("completing `{}` via redirect to `{}`", request.target, next);
            return Ok(ResolutionOutcome::Redirect(next));
        }

        let debug_format = self
            .debug_domain
            .get(request.target.flavors())?
            .map(|(_, format)| *format)
            .unwrap_or(self.default_debug_format);
        let include_frameworks = self
            .frameworks_domain
            .get(request.target.flavors())?
            .map(|(_, include)| *include)
            .unwrap_or(false);

        // Step 2: platform selection.
        let fat_binary_info = FatBinaryInfo::create(&self.platform_domain, &request.target);
        let platform_flavor = representative_platform(
            &self.platform_domain,
            self.default_platform,
            fat_binary_info.as_ref(),
            &request.target,
        )?;

        // Step 3: dependency flavor propagation.
        let deps = propagate_platform_flavors(
            &self.platform_domain,
            platform_flavor,
            &request.binary,
            &request.deps,
        )?;

        // Step 4: companion synthesis.
        let dsym_companion = dsym_companion(
            &request.target,
            debug_format,
            request.primary_artifact_present,
        );

        Ok(ResolutionOutcome::Resolved(ResolvedVariant {
            target: request.target.dupe(),
            platform_flavor,
            debug_format,
            include_frameworks,
            deps,
            dsym_companion,
        }))
    }
}

#[cfg(test)]
mod tests {
    use dupe::Dupe;
    use mason_core::flavors::Flavor;
    use mason_core::target::label::TargetLabel;

    use super::VariantRequest;
    use super::VariantResolver;
    use crate::debug_format::AppleDebugFormat;
    use crate::outcome::ResolutionOutcome;
    use crate::platform::testing::platform_domain;

    fn resolver() -> VariantResolver {
        VariantResolver::new(
            platform_domain(&[
                "iphoneos-arm64",
                "iphonesimulator-x86_64",
                "watchos-armv7k",
                "watchsimulator-i386",
            ]),
            Flavor::testing_new("iphoneos-arm64"),
            AppleDebugFormat::DwarfAndDsym,
        )
        .unwrap()
    }

    fn request(target: &str) -> VariantRequest {
        VariantRequest {
            target: TargetLabel::testing_parse(target),
            deps: vec![
                TargetLabel::testing_parse("root//app:binary"),
                TargetLabel::testing_parse("root//app:resources"),
                TargetLabel::testing_parse("root//watch:app#watch"),
            ],
            binary: TargetLabel::testing_parse("root//app:binary"),
            primary_artifact_present: true,
        }
    }

    #[test]
    fn test_completion_redirect_then_resolution() {
        let resolver = resolver();

        // The debug-format domain completes first, then include-frameworks;
        // each step is one redirect.
        let outcome = resolver.resolve(&request("root//app:bundle")).unwrap();
        assert_eq!(
            ResolutionOutcome::Redirect(TargetLabel::testing_parse(
                "root//app:bundle#dwarf-and-dsym"
            )),
            outcome
        );

        let outcome = resolver
            .resolve(&request("root//app:bundle#dwarf-and-dsym"))
            .unwrap();
        assert_eq!(
            ResolutionOutcome::Redirect(TargetLabel::testing_parse(
                "root//app:bundle#dwarf-and-dsym,no-include-frameworks"
            )),
            outcome
        );

        // Re-entering with the fully completed identity resolves.
        let resolved = resolver
            .resolve(&request("root//app:bundle#dwarf-and-dsym,no-include-frameworks"))
            .unwrap()
            .resolved()
            .unwrap();
        assert_eq!(AppleDebugFormat::DwarfAndDsym, resolved.debug_format);
        assert!(!resolved.include_frameworks);
        assert_eq!("iphoneos-arm64", resolved.platform_flavor.as_str());
        assert!(resolved.dsym_companion.is_some());
    }

    #[test]
    fn test_explicitly_flavored_target_is_not_redirected() {
        let resolver = resolver();
        let resolved = resolver
            .resolve(&request(
                "root//app:bundle#include-frameworks,no-debug,iphonesimulator-x86_64",
            ))
            .unwrap()
            .resolved()
            .unwrap();
        assert_eq!(AppleDebugFormat::None, resolved.debug_format);
        assert!(resolved.include_frameworks);
        assert_eq!(None, resolved.dsym_companion);
        // Simulator platform remaps the watch companion accordingly.
        assert!(
            resolved
                .deps
                .iter()
                .any(|d| d.to_string() == "root//watch:app#watchsimulator-i386")
        );
    }

    #[test]
    fn test_missing_artifact_skips_dsym() {
        let resolver = resolver();
        let mut request = request("root//app:bundle#dwarf-and-dsym,no-include-frameworks");
        request.primary_artifact_present = false;
        let resolved = resolver.resolve(&request).unwrap().resolved().unwrap();
        assert_eq!(None, resolved.dsym_companion);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = resolver();
        let request = request("root//app:bundle#dwarf,iphoneos-arm64,no-include-frameworks");
        let first = resolver.resolve(&request).unwrap().resolved().unwrap();
        let second = resolver.resolve(&request).unwrap().resolved().unwrap();
        assert_eq!(first, second);
        assert_eq!(request.target.dupe(), first.target);
    }
}
