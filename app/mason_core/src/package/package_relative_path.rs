/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;

use crate::fs::paths::forward_rel_path::ForwardRelativePathBuf;

/// A 'PackageRelativePath' is a normalized, platform-agnostic path relative to
/// the base directory of the package, i.e. the directory containing the build
/// file that referenced it.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct PackageRelativePathBuf(ForwardRelativePathBuf);

impl PackageRelativePathBuf {
    pub fn new(path: String) -> anyhow::Result<PackageRelativePathBuf> {
        Ok(PackageRelativePathBuf(ForwardRelativePathBuf::new(path)?))
    }

    pub fn unchecked_new(path: String) -> PackageRelativePathBuf {
        PackageRelativePathBuf(ForwardRelativePathBuf::unchecked_new(path))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_forward_rel_path(&self) -> &ForwardRelativePathBuf {
        &self.0
    }
}

impl Display for PackageRelativePathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}
