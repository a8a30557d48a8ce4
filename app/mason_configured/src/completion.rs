/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_core::flavors::domain::FlavorDomainMembership;
use mason_core::target::label::TargetLabel;

use crate::outcome::ResolutionOutcome;

#[derive(Debug, thiserror::Error)]
enum CompletionError {
    #[error("no flavor selected and no default for domain {0}")]
    NoDefault(String),
}

/// Check that `label` carries exactly one flavor from every domain. The first
/// domain with no flavor selected yields a redirect to the label with that
/// domain's default appended; one domain at a time, so each synthesized
/// identity is itself a resolvable target the caching layer can deduplicate.
/// A domain with neither a selected flavor nor a default is a configuration
/// error, as is more than one flavor of one domain.
///
/// Callers validate domain disjointness once when the domain set is
/// assembled, not per target.
pub fn complete_flavor_domains(
    label: &TargetLabel,
    domains: &[&dyn FlavorDomainMembership],
) -> anyhow::Result<ResolutionOutcome<()>> {
    for domain in domains {
        if domain.flavor_in(label.flavors())?.is_some() {
            continue;
        }
        match domain.default_flavor() {
            Some(default) => {
                return Ok(ResolutionOutcome::Redirect(
                    label.with_added_flavors([default]),
                ));
            }
            None => return Err(CompletionError::NoDefault(domain.name().to_owned()).into()),
        }
    }
    Ok(ResolutionOutcome::Resolved(()))
}

#[cfg(test)]
mod tests {
    use mason_core::flavors::Flavor;
    use mason_core::flavors::domain::FlavorDomain;
    use mason_core::flavors::domain::FlavorDomainMembership;
    use mason_core::target::label::TargetLabel;
    use starlark_map::ordered_map::OrderedMap;

    use super::complete_flavor_domains;
    use crate::outcome::ResolutionOutcome;

    fn domain(name: &str, flavors: &[&str], default: Option<&str>) -> FlavorDomain<()> {
        let mut translation = OrderedMap::new();
        for f in flavors {
            translation.insert(Flavor::testing_new(f), ());
        }
        FlavorDomain::new(name.to_owned(), translation, default.map(Flavor::testing_new)).unwrap()
    }

    #[test]
    fn test_redirects_one_domain_at_a_time() {
        let debug = domain("debug format", &["dwarf", "no-debug"], Some("dwarf"));
        let linkage = domain("linkage", &["shared", "static"], Some("static"));
        let domains: Vec<&dyn FlavorDomainMembership> = vec![&debug, &linkage];

        let bare = TargetLabel::testing_parse("root//a:b");
        let outcome = complete_flavor_domains(&bare, &domains).unwrap();
        assert_eq!(
            ResolutionOutcome::Redirect(TargetLabel::testing_parse("root//a:b#dwarf")),
            outcome
        );

        // Re-entering with the redirected identity completes the next domain.
        let once = TargetLabel::testing_parse("root//a:b#dwarf");
        let outcome = complete_flavor_domains(&once, &domains).unwrap();
        assert_eq!(
            ResolutionOutcome::Redirect(TargetLabel::testing_parse("root//a:b#dwarf,static")),
            outcome
        );

        let full = TargetLabel::testing_parse("root//a:b#dwarf,static");
        let outcome = complete_flavor_domains(&full, &domains).unwrap();
        assert_eq!(ResolutionOutcome::Resolved(()), outcome);
    }

    #[test]
    fn test_missing_default_is_fatal() {
        let debug = domain("debug format", &["dwarf"], None);
        let domains: Vec<&dyn FlavorDomainMembership> = vec![&debug];
        let err =
            complete_flavor_domains(&TargetLabel::testing_parse("root//a:b"), &domains)
                .unwrap_err();
        assert_eq!(
            "no flavor selected and no default for domain debug format",
            err.to_string()
        );
    }

    #[test]
    fn test_explicit_flavor_needs_no_redirect() {
        let debug = domain("debug format", &["dwarf", "no-debug"], Some("dwarf"));
        let domains: Vec<&dyn FlavorDomainMembership> = vec![&debug];
        let outcome = complete_flavor_domains(
            &TargetLabel::testing_parse("root//a:b#no-debug"),
            &domains,
        )
        .unwrap();
        assert_eq!(ResolutionOutcome::Resolved(()), outcome);
    }

    #[test]
    fn test_ambiguity_surfaces() {
        let debug = domain("debug format", &["dwarf", "no-debug"], Some("dwarf"));
        let domains: Vec<&dyn FlavorDomainMembership> = vec![&debug];
        let err = complete_flavor_domains(
            &TargetLabel::testing_parse("root//a:b#dwarf,no-debug"),
            &domains,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Multiple debug format flavors"));
    }
}
