/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;

use crate::fs::paths::forward_rel_path::ForwardRelativePathBuf;

#[derive(Debug, thiserror::Error)]
enum ProjectRootError {
    #[error("project root must be an absolute path, got `{0}`")]
    NotAbsolute(String),
}

/// The root of the project, i.e. the repository checkout the build tool
/// operates on. All paths in the core data model are relative to this root.
#[derive(Clone, Dupe, Debug, Eq, PartialEq, Allocative)]
pub struct ProjectRoot {
    root: Arc<PathBuf>,
}

impl ProjectRoot {
    pub fn new(root: PathBuf) -> anyhow::Result<ProjectRoot> {
        if !root.is_absolute() {
            return Err(ProjectRootError::NotAbsolute(root.display().to_string()).into());
        }
        Ok(ProjectRoot {
            root: Arc::new(root),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a project-relative path to an absolute filesystem path.
    pub fn resolve(&self, path: &ForwardRelativePathBuf) -> PathBuf {
        if path.is_empty() {
            (*self.root).clone()
        } else {
            self.root.join(path.as_str())
        }
    }

    /// Existence probe used for source-path validation. This is the only
    /// filesystem access the configuration front-end performs.
    pub fn exists(&self, path: &ForwardRelativePathBuf) -> bool {
        self.resolve(path).exists()
    }
}
