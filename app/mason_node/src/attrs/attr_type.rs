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

/// The declared type of one rule attribute.
///
/// This is a closed union: the set of attribute types is finite and known when
/// rule schemas are registered, so coercion dispatches by matching on this tag
/// rather than through an open-ended trait-object hierarchy.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Allocative)]
pub enum AttrType {
    Bool,
    Int,
    String,
    /// A homogeneous list of the inner type.
    List(Box<AttrType>),
    /// Keys and values each of one fixed type.
    Dict(Box<(AttrType, AttrType)>),
    /// The inner type, or the declaration language's none sentinel.
    Option(Box<AttrType>),
    /// A reference to another build target; becomes a dependency edge.
    Dep,
    /// A target reference or a package-relative source file path.
    Source,
}

impl AttrType {
    pub fn bool() -> AttrType {
        AttrType::Bool
    }

    pub fn int() -> AttrType {
        AttrType::Int
    }

    pub fn string() -> AttrType {
        AttrType::String
    }

    pub fn list(inner: AttrType) -> AttrType {
        AttrType::List(Box::new(inner))
    }

    pub fn dict(key: AttrType, value: AttrType) -> AttrType {
        AttrType::Dict(Box::new((key, value)))
    }

    pub fn option(inner: AttrType) -> AttrType {
        AttrType::Option(Box::new(inner))
    }

    pub fn dep() -> AttrType {
        AttrType::Dep
    }

    pub fn source() -> AttrType {
        AttrType::Source
    }

    /// Whether values of this type can contribute dependency edges to the
    /// build graph. Source attributes count: a source that names a target
    /// depends on that target's output.
    pub fn defines_dep_edges(&self) -> bool {
        match self {
            AttrType::Bool | AttrType::Int | AttrType::String => false,
            AttrType::List(inner) | AttrType::Option(inner) => inner.defines_dep_edges(),
            AttrType::Dict(kv) => kv.0.defines_dep_edges() || kv.1.defines_dep_edges(),
            AttrType::Dep | AttrType::Source => true,
        }
    }
}

impl Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrType::Bool => write!(f, "attrs.bool()"),
            AttrType::Int => write!(f, "attrs.int()"),
            AttrType::String => write!(f, "attrs.string()"),
            AttrType::List(inner) => write!(f, "attrs.list({})", inner),
            AttrType::Dict(kv) => write!(f, "attrs.dict({}, {})", kv.0, kv.1),
            AttrType::Option(inner) => write!(f, "attrs.option({})", inner),
            AttrType::Dep => write!(f, "attrs.dep()"),
            AttrType::Source => write!(f, "attrs.source()"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AttrType;

    #[test]
    fn test_display() {
        assert_eq!(
            "attrs.list(attrs.dep())",
            AttrType::list(AttrType::dep()).to_string()
        );
        assert_eq!(
            "attrs.dict(attrs.string(), attrs.int())",
            AttrType::dict(AttrType::string(), AttrType::int()).to_string()
        );
    }

    #[test]
    fn test_dep_edges() {
        assert!(AttrType::list(AttrType::dep()).defines_dep_edges());
        assert!(AttrType::option(AttrType::source()).defines_dep_edges());
        assert!(!AttrType::list(AttrType::string()).defines_dep_edges());
    }
}
