/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use dupe::Dupe;
use mason_core::cells::CellResolver;
use mason_core::fs::project::ProjectRoot;
use mason_core::package::PackageLabel;
use mason_core::package::package_relative_path::PackageRelativePathBuf;
use mason_core::pattern::parse_target_label;
use mason_core::target::label::TargetLabel;
use mason_node::attrs::coercion_context::AttrCoercionContext;

#[derive(Debug, thiserror::Error)]
enum BuildCoercionError {
    #[error("Source file `{0}` does not exist")]
    SourceFileMissing(String),
}

/// The coercion context for one build file evaluation: knows the declaring
/// package (for `:name` references and relative paths) and the cell table.
/// When a project root is supplied, coerced source paths are checked for
/// existence on disk; that probe is the only filesystem access coercion
/// performs.
pub struct BuildAttrCoercionContext {
    cell_resolver: CellResolver,
    enclosing_package: PackageLabel,
    project_root: Option<ProjectRoot>,
}

impl BuildAttrCoercionContext {
    pub fn new(
        cell_resolver: CellResolver,
        enclosing_package: PackageLabel,
        project_root: Option<ProjectRoot>,
    ) -> BuildAttrCoercionContext {
        BuildAttrCoercionContext {
            cell_resolver,
            enclosing_package,
            project_root,
        }
    }

    pub fn package(&self) -> &PackageLabel {
        &self.enclosing_package
    }
}

impl AttrCoercionContext for BuildAttrCoercionContext {
    fn coerce_label(&self, value: &str) -> anyhow::Result<TargetLabel> {
        parse_target_label(
            self.cell_resolver.root_aliases(),
            Some(&self.enclosing_package),
            value,
        )
    }

    fn coerce_path(&self, value: &str) -> anyhow::Result<PackageRelativePathBuf> {
        let path = PackageRelativePathBuf::new(value.to_owned())?;
        if let Some(root) = &self.project_root {
            let cell_root = self.cell_resolver.get(self.enclosing_package.cell_name())?;
            let project_rel = cell_root
                .join(self.enclosing_package.cell_relative_path())
                .join(path.as_forward_rel_path());
            if !root.exists(&project_rel) {
                return Err(BuildCoercionError::SourceFileMissing(value.to_owned()).into());
            }
        }
        Ok(path)
    }

    fn intern_str(&self, value: &str) -> Arc<str> {
        // A per-context intern table is an optimization the caching layer
        // provides; here each string is allocated fresh.
        Arc::from(value)
    }
}

impl BuildAttrCoercionContext {
    /// A context for the same cell table but a different package, reusing the
    /// shared resolver.
    pub fn for_package(&self, package: PackageLabel) -> BuildAttrCoercionContext {
        BuildAttrCoercionContext::new(
            self.cell_resolver.dupe(),
            package,
            self.project_root.clone(),
        )
    }
}
