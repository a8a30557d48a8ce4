/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

pub mod package_relative_path;

use std::fmt;
use std::fmt::Display;
use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;

use crate::cells::name::CellName;
use crate::fs::paths::forward_rel_path::ForwardRelativePathBuf;

/// A 'PackageLabel' is a combination of a cell and a cell-relative directory,
/// e.g. `root//some/package`. It identifies the directory a build file lives
/// in, and is the "package path" that all rule declarations in that build file
/// belong to.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct PackageLabel(Arc<PackageLabelData>);

#[derive(Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
struct PackageLabelData {
    cell: CellName,
    path: ForwardRelativePathBuf,
}

impl PackageLabel {
    pub fn new(cell: CellName, path: ForwardRelativePathBuf) -> PackageLabel {
        PackageLabel(Arc::new(PackageLabelData { cell, path }))
    }

    pub fn testing_parse(label: &str) -> PackageLabel {
        let (cell, path) = label.split_once("//").unwrap();
        PackageLabel::new(
            CellName::testing_new(cell),
            ForwardRelativePathBuf::new(path.to_owned()).unwrap(),
        )
    }

    pub fn cell_name(&self) -> CellName {
        self.0.cell
    }

    pub fn cell_relative_path(&self) -> &ForwardRelativePathBuf {
        &self.0.path
    }
}

impl Display for PackageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//{}", self.0.cell, self.0.path)
    }
}

#[cfg(test)]
mod tests {
    use super::PackageLabel;

    #[test]
    fn test_display() {
        let pkg = PackageLabel::testing_parse("root//foo/bar");
        assert_eq!("root//foo/bar", pkg.to_string());
        assert_eq!("root", pkg.cell_name().as_str());
        assert_eq!("foo/bar", pkg.cell_relative_path().as_str());
    }
}
