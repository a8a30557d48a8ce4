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
use itertools::Itertools;
use mason_core::source_path::SourcePath;
use mason_core::target::label::ConfiguredTargetLabel;

/// The final, configured form of an attribute value: target references carry
/// the configuration they will be built in, and source files are scoped under
/// the package that declared them. Owned by the constructor arg it belongs to;
/// never shared mutably.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Allocative)]
pub enum ConfiguredAttr {
    None,
    Bool(bool),
    Int(i64),
    String(#[allocative(skip)] Arc<str>),
    List(Box<[ConfiguredAttr]>),
    Dict(Box<[(ConfiguredAttr, ConfiguredAttr)]>),
    Dep(ConfiguredTargetLabel),
    Source(SourcePath),
}

impl ConfiguredAttr {
    /// Invoke `traversal` for every configured target this value references.
    pub fn traverse_deps(&self, traversal: &mut dyn FnMut(&ConfiguredTargetLabel)) {
        match self {
            ConfiguredAttr::None
            | ConfiguredAttr::Bool(_)
            | ConfiguredAttr::Int(_)
            | ConfiguredAttr::String(_)
            | ConfiguredAttr::Source(SourcePath::File(_)) => {}
            ConfiguredAttr::List(items) => {
                for item in items.iter() {
                    item.traverse_deps(traversal);
                }
            }
            ConfiguredAttr::Dict(entries) => {
                for (k, v) in entries.iter() {
                    k.traverse_deps(traversal);
                    v.traverse_deps(traversal);
                }
            }
            ConfiguredAttr::Dep(label) => traversal(label),
            ConfiguredAttr::Source(SourcePath::Build(label)) => traversal(label),
        }
    }
}

impl Display for ConfiguredAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfiguredAttr::None => write!(f, "None"),
            ConfiguredAttr::Bool(true) => write!(f, "True"),
            ConfiguredAttr::Bool(false) => write!(f, "False"),
            ConfiguredAttr::Int(v) => write!(f, "{}", v),
            ConfiguredAttr::String(v) => write!(f, "\"{}\"", v),
            ConfiguredAttr::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            ConfiguredAttr::Dict(entries) => write!(
                f,
                "{{{}}}",
                entries.iter().map(|(k, v)| format!("{}: {}", k, v)).join(", ")
            ),
            ConfiguredAttr::Dep(label) => write!(f, "\"{}\"", label),
            ConfiguredAttr::Source(source) => write!(f, "\"{}\"", source),
        }
    }
}
