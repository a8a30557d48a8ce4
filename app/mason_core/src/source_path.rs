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

use crate::package::package_relative_path::PackageRelativePathBuf;
use crate::package::PackageLabel;
use crate::target::label::ConfiguredTargetLabel;

/// A coerced reference to a source: either the output of another build target,
/// or a file in the repository scoped under the package that declared it.
/// Never an absolute path.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Allocative)]
pub enum SourcePath {
    /// The (configured) target whose default output provides the source.
    Build(ConfiguredTargetLabel),
    /// A file belonging to the declaring package.
    File(PathSourcePath),
}

#[derive(Clone, Debug, Hash, Eq, PartialEq, Allocative)]
pub struct PathSourcePath {
    package: PackageLabel,
    path: PackageRelativePathBuf,
}

impl PathSourcePath {
    pub fn new(package: PackageLabel, path: PackageRelativePathBuf) -> PathSourcePath {
        PathSourcePath { package, path }
    }

    pub fn package(&self) -> &PackageLabel {
        &self.package
    }

    pub fn path(&self) -> &PackageRelativePathBuf {
        &self.path
    }
}

impl Display for PathSourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.path)
    }
}

impl Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePath::Build(label) => Display::fmt(label, f),
            SourcePath::File(path) => Display::fmt(path, f),
        }
    }
}
