/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use mason_core::package::package_relative_path::PackageRelativePathBuf;
use mason_core::target::label::TargetLabel;

/// The context for attribute coercion. Mostly just contains information about
/// the current package, to support parsing targets and paths from strings.
/// Implementations must not consult build configurations: coercion results
/// are cached independently of configuration.
pub trait AttrCoercionContext {
    /// Attempt to convert a string into a target label.
    fn coerce_label(&self, value: &str) -> anyhow::Result<TargetLabel>;

    /// Attempt to convert a string into a package-relative path.
    fn coerce_path(&self, value: &str) -> anyhow::Result<PackageRelativePathBuf>;

    /// Reuse a previously allocated string if possible.
    fn intern_str(&self, value: &str) -> Arc<str>;
}
