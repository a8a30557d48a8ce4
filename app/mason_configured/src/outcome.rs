/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use dupe::Dupe;
use mason_core::target::label::TargetLabel;

#[derive(Debug, thiserror::Error)]
enum RedirectError {
    #[error(
        "Exceeded {0} redirects resolving `{1}`; last redirect was to `{2}`. \
         This indicates a flavor-completion cycle."
    )]
    BudgetExceeded(usize, TargetLabel, TargetLabel),
}

/// The result of one resolution attempt. A redirect is a request to re-enter
/// resolution with a new target identity, not a value: representing it as
/// data (rather than resolving recursively here) lets a caching resolver
/// layer deduplicate concurrent requests for the same synthesized identity.
#[derive(Debug, Eq, PartialEq)]
pub enum ResolutionOutcome<T> {
    Resolved(T),
    Redirect(TargetLabel),
}

impl<T> ResolutionOutcome<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ResolutionOutcome::Redirect(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            ResolutionOutcome::Resolved(value) => Some(value),
            ResolutionOutcome::Redirect(_) => None,
        }
    }
}

/// Drive `resolve` through redirects until it produces a value, following at
/// most `limit` redirects. Callers with a caching layer follow redirects
/// through that layer instead; this helper is the uncached reference loop.
pub fn resolve_with_redirects<T>(
    limit: usize,
    label: TargetLabel,
    mut resolve: impl FnMut(&TargetLabel) -> anyhow::Result<ResolutionOutcome<T>>,
) -> anyhow::Result<T> {
    let requested = label.dupe();
    let mut current = label;
    for _ in 0..=limit {
        match resolve(&current)? {
            ResolutionOutcome::Resolved(value) => return Ok(value),
            ResolutionOutcome::Redirect(next) => {
                tracing::debug!("resolution of `{}` redirected to `{}`", current, next);
                current = next;
            }
        }
    }
    Err(RedirectError::BudgetExceeded(limit, requested, current).into())
}
