/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The cell table: symbolic cell aliases and cell roots.

pub mod name;

use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;
use starlark_map::small_map::SmallMap;

use crate::cells::name::CellName;
use crate::fs::paths::forward_rel_path::ForwardRelativePathBuf;

#[derive(Debug, thiserror::Error)]
enum CellError {
    #[error("unknown cell alias: `{0}`. Known aliases are: {}", .1.join(", "))]
    UnknownAlias(String, Vec<String>),
    #[error("unknown cell: `{0}`")]
    UnknownCell(CellName),
}

/// Resolves the symbolic cell aliases visible from one cell to canonical cell
/// names. The empty alias (`//foo:bar`) resolves to the current cell.
#[derive(Clone, Debug, Allocative)]
pub struct CellAliasResolver {
    current: CellName,
    aliases: Arc<SmallMap<String, CellName>>,
}

impl CellAliasResolver {
    pub fn new(current: CellName, aliases: SmallMap<String, CellName>) -> CellAliasResolver {
        CellAliasResolver {
            current,
            aliases: Arc::new(aliases),
        }
    }

    pub fn current(&self) -> CellName {
        self.current
    }

    pub fn resolve(&self, alias: &str) -> anyhow::Result<CellName> {
        if alias.is_empty() {
            return Ok(self.current);
        }
        if let Some(name) = self.aliases.get(alias) {
            return Ok(*name);
        }
        // A canonical cell name is always a valid alias for itself.
        if self.current.as_str() == alias {
            return Ok(self.current);
        }
        Err(CellError::UnknownAlias(
            alias.to_owned(),
            self.aliases.keys().cloned().collect(),
        )
        .into())
    }
}

/// Maps canonical cell names to their project-relative roots. Constructed once
/// at startup and never mutated afterwards.
#[derive(Clone, Debug, Allocative)]
pub struct CellResolver {
    cells: Arc<SmallMap<CellName, ForwardRelativePathBuf>>,
    root_aliases: CellAliasResolver,
}

impl CellResolver {
    pub fn new(
        cells: SmallMap<CellName, ForwardRelativePathBuf>,
        root_aliases: CellAliasResolver,
    ) -> CellResolver {
        CellResolver {
            cells: Arc::new(cells),
            root_aliases,
        }
    }

    /// A single-cell project rooted at the project root, for tests.
    pub fn testing_with_root(name: &str) -> CellResolver {
        let cell = CellName::testing_new(name);
        let mut cells = SmallMap::new();
        cells.insert(cell, ForwardRelativePathBuf::empty());
        CellResolver::new(cells, CellAliasResolver::new(cell, SmallMap::new()))
    }

    pub fn get(&self, cell: CellName) -> anyhow::Result<&ForwardRelativePathBuf> {
        self.cells
            .get(&cell)
            .ok_or_else(|| CellError::UnknownCell(cell).into())
    }

    pub fn root_aliases(&self) -> &CellAliasResolver {
        &self.root_aliases
    }

    pub fn contains(&self, cell: CellName) -> bool {
        self.cells.contains_key(&cell)
    }
}

// Not derived: `CellResolver` clones share the underlying tables.
impl Dupe for CellAliasResolver {}
impl Dupe for CellResolver {}

#[cfg(test)]
mod tests {
    use starlark_map::small_map::SmallMap;

    use super::CellAliasResolver;
    use super::CellResolver;
    use crate::cells::name::CellName;

    #[test]
    fn test_alias_resolution() {
        let root = CellName::testing_new("root");
        let other = CellName::testing_new("other");
        let mut aliases = SmallMap::new();
        aliases.insert("other_alias".to_owned(), other);
        let resolver = CellAliasResolver::new(root, aliases);

        assert_eq!(root, resolver.resolve("").unwrap());
        assert_eq!(root, resolver.resolve("root").unwrap());
        assert_eq!(other, resolver.resolve("other_alias").unwrap());
        assert!(resolver.resolve("nope").is_err());
    }

    #[test]
    fn test_cell_lookup() {
        let resolver = CellResolver::testing_with_root("root");
        assert!(resolver.get(CellName::testing_new("root")).is_ok());
        assert!(resolver.get(CellName::testing_new("missing")).is_err());
    }
}
