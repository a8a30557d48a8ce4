/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Flavors: opaque variant tags on build targets (platform, debug-info mode,
//! linkage, ...). A target's identity includes its flavor set; two targets
//! differing only in flavors are distinct build variants of one declared rule.

pub mod domain;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::Display;
use std::sync::Arc;

use allocative::Allocative;
use dupe::Dupe;
use internment::Intern;
use itertools::Itertools;
use once_cell::sync::Lazy;

#[derive(Debug, thiserror::Error)]
enum FlavorError {
    #[error("Invalid empty flavor name")]
    Empty,
    #[error("Invalid characters in flavor name: `{0}`")]
    InvalidName(String),
}

/// An opaque interned tag denoting one build-variant dimension of a target,
/// e.g. `iphoneos-x86_64` or `dwarf-and-dsym`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Allocative)]
pub struct Flavor(#[allocative(skip)] Intern<String>);

impl Dupe for Flavor {}

impl Flavor {
    pub fn new(name: &str) -> anyhow::Result<Flavor> {
        if name.is_empty() {
            return Err(FlavorError::Empty.into());
        }
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '='));
        if !valid {
            return Err(FlavorError::InvalidName(name.to_owned()).into());
        }
        Ok(Flavor(Intern::new(name.to_owned())))
    }

    pub fn testing_new(name: &str) -> Flavor {
        Flavor::new(name).unwrap()
    }

    pub fn as_str(&self) -> &'static str {
        self.0.as_ref().as_str()
    }
}

impl Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}

impl PartialOrd for Flavor {
    fn partial_cmp(&self, other: &Flavor) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Flavor {
    fn cmp(&self, other: &Flavor) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

/// The set of flavors on one build target. Insertion order is irrelevant;
/// iteration is in sorted order so that identity, display and hashing are
/// deterministic. Duplicate flavors collapse.
#[derive(Clone, Dupe, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct FlavorSet(Arc<BTreeSet<Flavor>>);

static EMPTY: Lazy<FlavorSet> = Lazy::new(|| FlavorSet(Arc::new(BTreeSet::new())));

impl FlavorSet {
    pub fn new(flavors: impl IntoIterator<Item = Flavor>) -> FlavorSet {
        FlavorSet(Arc::new(flavors.into_iter().collect()))
    }

    pub fn empty() -> FlavorSet {
        EMPTY.dupe()
    }

    pub fn testing_parse(flavors: &str) -> FlavorSet {
        if flavors.is_empty() {
            FlavorSet::empty()
        } else {
            FlavorSet::new(flavors.split(',').map(Flavor::testing_new))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, flavor: Flavor) -> bool {
        self.0.contains(&flavor)
    }

    pub fn iter(&self) -> impl Iterator<Item = Flavor> + '_ {
        self.0.iter().copied()
    }

    /// A new set with `flavors` added. The receiver is unchanged.
    pub fn with_added(&self, flavors: impl IntoIterator<Item = Flavor>) -> FlavorSet {
        let mut set = (*self.0).clone();
        set.extend(flavors);
        FlavorSet(Arc::new(set))
    }

    /// A new set with `flavors` removed. The receiver is unchanged.
    pub fn without(&self, flavors: impl IntoIterator<Item = Flavor>) -> FlavorSet {
        let mut set = (*self.0).clone();
        for flavor in flavors {
            set.remove(&flavor);
        }
        FlavorSet(Arc::new(set))
    }
}

impl Display for FlavorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}
