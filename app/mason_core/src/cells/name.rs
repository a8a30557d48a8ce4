/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use dupe::Dupe;
use internment::Intern;

#[derive(Debug, thiserror::Error)]
enum CellNameError {
    #[error("Cell name must be non-empty")]
    Empty,
    #[error("Cell name contains invalid character: `{0}`")]
    InvalidName(String),
}

/// A 'CellName' is a canonicalized, human-readable name that corresponds to
/// one cell of the project. The cell within a fully qualified target like
/// `foo//some:target` is `foo`.
///
/// Cell names are interned, so equality and hashing are pointer-sized.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Allocative)]
pub struct CellName(#[allocative(skip)] Intern<String>);

impl Dupe for CellName {}

impl CellName {
    /// Construct a cell name.
    ///
    /// This function is unchecked in the sense that it does not validate that
    /// the name points to an existing cell; it should only be used when
    /// constructing the cell table at startup.
    pub fn unchecked_new(name: &str) -> anyhow::Result<CellName> {
        if name.is_empty() {
            return Err(CellNameError::Empty.into());
        }
        if name.contains('/') || name.contains(':') || name.contains('#') {
            return Err(CellNameError::InvalidName(name.to_owned()).into());
        }
        Ok(CellName(Intern::new(name.to_owned())))
    }

    pub fn testing_new(name: &str) -> CellName {
        CellName::unchecked_new(name).unwrap()
    }

    pub fn as_str(&self) -> &'static str {
        self.0.as_ref().as_str()
    }
}

impl Display for CellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}

impl PartialOrd for CellName {
    fn partial_cmp(&self, other: &CellName) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellName {
    fn cmp(&self, other: &CellName) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}
