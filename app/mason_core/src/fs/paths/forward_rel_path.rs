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

#[derive(Debug, thiserror::Error)]
enum ForwardRelativePathError {
    #[error("expected a relative path but got an absolute path instead: `{0}`")]
    PathNotRelative(String),
    #[error("expected a normalized path but got a non-normalized path instead: `{0}`")]
    PathNotNormalized(String),
    #[error("path should only contain forward slashes: `{0}`")]
    PathWithBackslash(String),
}

/// A normalized, platform-agnostic, forward-slash-separated relative path.
///
/// The path is guaranteed to not be absolute and to contain no `.` or `..`
/// segments, so it can be used as a key and joined without re-normalization.
/// The empty path refers to the directory it is relative to.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct ForwardRelativePathBuf(String);

impl ForwardRelativePathBuf {
    pub fn new(path: String) -> anyhow::Result<ForwardRelativePathBuf> {
        if path.is_empty() {
            return Ok(ForwardRelativePathBuf(path));
        }
        if path.contains('\\') {
            return Err(ForwardRelativePathError::PathWithBackslash(path).into());
        }
        if path.starts_with('/') {
            return Err(ForwardRelativePathError::PathNotRelative(path).into());
        }
        if path.ends_with('/') {
            return Err(ForwardRelativePathError::PathNotNormalized(path).into());
        }
        for segment in path.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(ForwardRelativePathError::PathNotNormalized(path).into());
            }
        }
        Ok(ForwardRelativePathBuf(path))
    }

    /// `path` must already be a valid forward relative path.
    pub fn unchecked_new(path: String) -> ForwardRelativePathBuf {
        ForwardRelativePathBuf(path)
    }

    pub fn empty() -> ForwardRelativePathBuf {
        ForwardRelativePathBuf(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    pub fn join(&self, other: &ForwardRelativePathBuf) -> ForwardRelativePathBuf {
        if self.0.is_empty() {
            other.clone()
        } else if other.0.is_empty() {
            self.clone()
        } else {
            ForwardRelativePathBuf(format!("{}/{}", self.0, other.0))
        }
    }
}

impl Display for ForwardRelativePathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::ForwardRelativePathBuf;

    #[test]
    fn test_valid_paths() {
        assert!(ForwardRelativePathBuf::new("".to_owned()).is_ok());
        assert!(ForwardRelativePathBuf::new("foo".to_owned()).is_ok());
        assert!(ForwardRelativePathBuf::new("foo/bar/baz.txt".to_owned()).is_ok());
    }

    #[test]
    fn test_invalid_paths() {
        assert!(ForwardRelativePathBuf::new("/abs".to_owned()).is_err());
        assert!(ForwardRelativePathBuf::new("foo//bar".to_owned()).is_err());
        assert!(ForwardRelativePathBuf::new("foo/".to_owned()).is_err());
        assert!(ForwardRelativePathBuf::new("./foo".to_owned()).is_err());
        assert!(ForwardRelativePathBuf::new("../foo".to_owned()).is_err());
        assert!(ForwardRelativePathBuf::new("foo\\bar".to_owned()).is_err());
    }

    #[test]
    fn test_join() {
        let a = ForwardRelativePathBuf::new("foo".to_owned()).unwrap();
        let b = ForwardRelativePathBuf::new("bar/baz".to_owned()).unwrap();
        assert_eq!("foo/bar/baz", a.join(&b).as_str());
        assert_eq!("foo", a.join(&ForwardRelativePathBuf::empty()).as_str());
        assert_eq!("bar/baz", ForwardRelativePathBuf::empty().join(&b).as_str());
    }
}
