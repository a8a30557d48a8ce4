/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;
use dupe::Dupe;
use starlark_map::small_map::SmallMap;

use crate::attrs::attr::Attribute;

#[derive(Debug, thiserror::Error)]
enum AttributeSpecError {
    #[error("Duplicate attribute `{0}` in rule schema")]
    DuplicateAttribute(String),
    #[error("Too many attributes in rule schema: {0}")]
    TooManyAttributes(usize),
}

/// The index of an attribute within its `AttributeSpec`. Stable for the
/// process lifetime, so attribute values can be stored in id-sorted vectors
/// instead of maps.
#[derive(Clone, Dupe, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Allocative)]
pub struct AttributeId(pub u16);

/// The ordered attribute table of one rule kind, keyed uniquely by name.
/// Created once when the rule schema is registered; immutable afterwards.
#[derive(Debug, Clone, Eq, PartialEq, Allocative)]
pub struct AttributeSpec {
    attributes: SmallMap<String, Attribute>,
}

impl AttributeSpec {
    pub fn from(attributes: Vec<(String, Attribute)>) -> anyhow::Result<AttributeSpec> {
        if attributes.len() > u16::MAX as usize {
            return Err(AttributeSpecError::TooManyAttributes(attributes.len()).into());
        }
        let mut map = SmallMap::with_capacity(attributes.len());
        for (name, attribute) in attributes {
            if map.insert(name.clone(), attribute).is_some() {
                return Err(AttributeSpecError::DuplicateAttribute(name).into());
            }
        }
        Ok(AttributeSpec { attributes: map })
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in registration order.
    pub fn attr_specs(
        &self,
    ) -> impl ExactSizeIterator<Item = (&str, AttributeId, &Attribute)> + '_ {
        self.attributes
            .iter()
            .enumerate()
            .map(|(idx, (name, attribute))| (name.as_str(), AttributeId(idx as u16), attribute))
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attribute_id(&self, name: &str) -> Option<AttributeId> {
        self.attributes
            .get_index_of(name)
            .map(|idx| AttributeId(idx as u16))
    }

    pub fn attribute_by_id(&self, id: AttributeId) -> (&str, &Attribute) {
        let (name, attribute) = self
            .attributes
            .get_index(id.0 as usize)
            .expect("AttributeId is only created by this spec");
        (name.as_str(), attribute)
    }
}
