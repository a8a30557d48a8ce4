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
use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;

#[derive(Debug, thiserror::Error)]
enum TargetNameError {
    #[error("Target name is empty")]
    Empty,
    #[error("Invalid target name `{0}`: must not contain `{1}`")]
    InvalidCharacter(String, char),
}

/// The name of a declared rule within its package, the `bar` in `foo//x:bar`.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct TargetName(#[allocative(skip)] Arc<str>);

impl TargetName {
    pub fn new(name: &str) -> anyhow::Result<TargetName> {
        if name.is_empty() {
            return Err(TargetNameError::Empty.into());
        }
        for bad in [':', '/', '#'] {
            if name.contains(bad) {
                return Err(TargetNameError::InvalidCharacter(name.to_owned(), bad).into());
            }
        }
        Ok(TargetName(Arc::from(name)))
    }

    pub fn testing_new(name: &str) -> TargetName {
        TargetName::new(name).unwrap()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::TargetName;

    #[test]
    fn test_validation() {
        assert!(TargetName::new("main").is_ok());
        assert!(TargetName::new("").is_err());
        assert!(TargetName::new("a:b").is_err());
        assert!(TargetName::new("a/b").is_err());
        assert!(TargetName::new("a#b").is_err());
    }
}
