/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Parsing of textual target references as they appear in build files:
//! `:name`, `//package:name`, `cell//package:name`, each optionally followed
//! by `#flavor(,flavor)*`.

use crate::cells::CellAliasResolver;
use crate::flavors::Flavor;
use crate::flavors::FlavorSet;
use crate::fs::paths::forward_rel_path::ForwardRelativePathBuf;
use crate::package::PackageLabel;
use crate::target::label::TargetLabel;
use crate::target::name::TargetName;

#[derive(Debug, thiserror::Error)]
enum TargetParseError {
    #[error("Expected target pattern to contain `:`, got `{0}`")]
    UnexpectedFormat(String),
    #[error(
        "Must be absolute. Starting with either `//` for a cell alias or `:` for a relative target, got `{0}`"
    )]
    AbsoluteRequired(String),
    #[error("Relative target `{0}` can only be used inside a package (build file) context")]
    RelativeWithoutPackage(String),
    #[error("Packages may not end with a trailing `/`: `{0}`")]
    PackageTrailingSlash(String),
    #[error("Empty flavor list in `{0}`")]
    EmptyFlavors(String),
}

/// Parse a target reference string, resolving cell aliases through
/// `cell_alias_resolver` and relative (`:name`) references against
/// `enclosing_package`.
///
/// Parsing is purely lexical: the referenced target is named, never resolved,
/// so this is safe to call during attribute coercion.
pub fn parse_target_label(
    cell_alias_resolver: &CellAliasResolver,
    enclosing_package: Option<&PackageLabel>,
    value: &str,
) -> anyhow::Result<TargetLabel> {
    let (base, flavors) = split_flavors(value)?;

    if let Some(name) = base.strip_prefix(':') {
        let pkg = enclosing_package
            .ok_or_else(|| TargetParseError::RelativeWithoutPackage(value.to_owned()))?;
        return Ok(TargetLabel::with_flavors(
            pkg.clone(),
            TargetName::new(name)?,
            flavors,
        ));
    }

    let (alias, rest) = base
        .split_once("//")
        .ok_or_else(|| TargetParseError::AbsoluteRequired(value.to_owned()))?;
    let cell = cell_alias_resolver.resolve(alias)?;

    let (package, name) = rest
        .rsplit_once(':')
        .ok_or_else(|| TargetParseError::UnexpectedFormat(value.to_owned()))?;
    if package.ends_with('/') {
        return Err(TargetParseError::PackageTrailingSlash(value.to_owned()).into());
    }

    let pkg = PackageLabel::new(cell, ForwardRelativePathBuf::new(package.to_owned())?);
    Ok(TargetLabel::with_flavors(
        pkg,
        TargetName::new(name)?,
        flavors,
    ))
}

fn split_flavors(value: &str) -> anyhow::Result<(&str, FlavorSet)> {
    match value.split_once('#') {
        None => Ok((value, FlavorSet::empty())),
        Some((_, "")) => Err(TargetParseError::EmptyFlavors(value.to_owned()).into()),
        Some((base, flavors)) => {
            let flavors = flavors
                .split(',')
                .map(Flavor::new)
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok((base, FlavorSet::new(flavors)))
        }
    }
}
