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
use itertools::Itertools;
use mason_core::package::PackageLabel;
use mason_core::package::package_relative_path::PackageRelativePathBuf;
use mason_core::source_path::PathSourcePath;
use mason_core::source_path::SourcePath;
use mason_core::target::label::TargetLabel;

use crate::attrs::configuration_context::AttrConfigurationContext;
use crate::attrs::configured_attr::ConfiguredAttr;

/// 'CoercedAttr' is the "coerced" representation of an attribute: it has been
/// type-checked against the attribute's declared type and converted to
/// specific types (where we expect target-like things, it holds a
/// `TargetLabel`), but it is still configuration-independent. That makes it
/// cacheable keyed only by the raw value and the declaring package, which is a
/// prerequisite for memoizing coercion across configurations.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Allocative)]
pub enum CoercedAttr {
    None,
    Bool(bool),
    Int(i64),
    String(#[allocative(skip)] Arc<str>),
    List(Box<[CoercedAttr]>),
    Dict(Box<[(CoercedAttr, CoercedAttr)]>),
    /// An explicit dependency edge on another target.
    Dep(TargetLabel),
    /// A source provided by another target's output.
    SourceLabel(TargetLabel),
    /// A source file relative to the declaring package.
    SourceFile(PackageRelativePathBuf),
}

impl CoercedAttr {
    /// Apply a configuration pair, producing the final typed value. Pure:
    /// the result is a function of `(self, pkg, ctx)` only, so re-running
    /// with equal inputs yields a value-equal result.
    pub fn configure(
        &self,
        pkg: &PackageLabel,
        ctx: &dyn AttrConfigurationContext,
    ) -> anyhow::Result<ConfiguredAttr> {
        Ok(match self {
            CoercedAttr::None => ConfiguredAttr::None,
            CoercedAttr::Bool(v) => ConfiguredAttr::Bool(*v),
            CoercedAttr::Int(v) => ConfiguredAttr::Int(*v),
            CoercedAttr::String(v) => ConfiguredAttr::String(v.dupe()),
            CoercedAttr::List(items) => ConfiguredAttr::List(
                items
                    .iter()
                    .map(|v| v.configure(pkg, ctx))
                    .collect::<anyhow::Result<Vec<_>>>()?
                    .into_boxed_slice(),
            ),
            CoercedAttr::Dict(entries) => ConfiguredAttr::Dict(
                entries
                    .iter()
                    .map(|(k, v)| Ok((k.configure(pkg, ctx)?, v.configure(pkg, ctx)?)))
                    .collect::<anyhow::Result<Vec<_>>>()?
                    .into_boxed_slice(),
            ),
            CoercedAttr::Dep(label) => ConfiguredAttr::Dep(label.configure(ctx.cfg())),
            CoercedAttr::SourceLabel(label) => {
                ConfiguredAttr::Source(SourcePath::Build(label.configure(ctx.cfg())))
            }
            CoercedAttr::SourceFile(path) => ConfiguredAttr::Source(SourcePath::File(
                PathSourcePath::new(pkg.dupe(), path.clone()),
            )),
        })
    }

    /// Invoke `traversal` for every target this value references.
    pub fn traverse_deps(&self, traversal: &mut dyn FnMut(&TargetLabel)) {
        match self {
            CoercedAttr::None
            | CoercedAttr::Bool(_)
            | CoercedAttr::Int(_)
            | CoercedAttr::String(_)
            | CoercedAttr::SourceFile(_) => {}
            CoercedAttr::List(items) => {
                for item in items.iter() {
                    item.traverse_deps(traversal);
                }
            }
            CoercedAttr::Dict(entries) => {
                for (k, v) in entries.iter() {
                    k.traverse_deps(traversal);
                    v.traverse_deps(traversal);
                }
            }
            CoercedAttr::Dep(label) | CoercedAttr::SourceLabel(label) => traversal(label),
        }
    }
}

/// Roughly the stringified declaration-language code that would produce this
/// value, used in error messages.
impl Display for CoercedAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercedAttr::None => write!(f, "None"),
            CoercedAttr::Bool(true) => write!(f, "True"),
            CoercedAttr::Bool(false) => write!(f, "False"),
            CoercedAttr::Int(v) => write!(f, "{}", v),
            CoercedAttr::String(v) => write!(f, "\"{}\"", v),
            CoercedAttr::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            CoercedAttr::Dict(entries) => write!(
                f,
                "{{{}}}",
                entries.iter().map(|(k, v)| format!("{}: {}", k, v)).join(", ")
            ),
            CoercedAttr::Dep(label) | CoercedAttr::SourceLabel(label) => {
                write!(f, "\"{}\"", label)
            }
            CoercedAttr::SourceFile(path) => write!(f, "\"{}\"", path),
        }
    }
}
