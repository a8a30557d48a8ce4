/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Helpers for tests that need a coercion context.

use mason_core::cells::CellResolver;
use mason_core::package::PackageLabel;

use crate::attrs::coerce::ctx::BuildAttrCoercionContext;

/// A single-cell context declaring in `root//pkg`, with no filesystem checks.
pub fn coercion_ctx() -> BuildAttrCoercionContext {
    coercion_ctx_for_package(PackageLabel::testing_parse("root//pkg"))
}

pub fn coercion_ctx_for_package(package: PackageLabel) -> BuildAttrCoercionContext {
    BuildAttrCoercionContext::new(CellResolver::testing_with_root("root"), package, None)
}
