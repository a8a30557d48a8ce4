/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use allocative::Allocative;

use crate::attrs::coerced_attr::CoercedAttr;
use crate::attrs::spec::AttributeId;

/// The attribute values explicitly set on one target declaration, stored as a
/// vector sorted by `AttributeId`. Omitted attributes are absent here and fall
/// back to their defaults at lookup time.
#[derive(Debug, Clone, Eq, PartialEq, Allocative)]
pub struct AttrValues {
    sorted: Vec<(AttributeId, CoercedAttr)>,
}

impl AttrValues {
    pub fn with_capacity(capacity: usize) -> AttrValues {
        AttrValues {
            sorted: Vec::with_capacity(capacity),
        }
    }

    pub fn get(&self, id: AttributeId) -> Option<&CoercedAttr> {
        self.sorted
            .binary_search_by_key(&id, |(k, _)| *k)
            .ok()
            .map(|idx| &self.sorted[idx].1)
    }

    /// Push a value for an id greater than everything pushed so far.
    pub fn push_sorted(&mut self, id: AttributeId, value: CoercedAttr) {
        if let Some((last_id, _)) = self.sorted.last() {
            assert!(*last_id < id, "attributes must be pushed in id order");
        }
        self.sorted.push((id, value));
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &(AttributeId, CoercedAttr)> {
        self.sorted.iter()
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::AttrValues;
    use crate::attrs::coerced_attr::CoercedAttr;
    use crate::attrs::spec::AttributeId;

    #[test]
    fn test_get() {
        let mut values = AttrValues::with_capacity(2);
        values.push_sorted(AttributeId(1), CoercedAttr::Int(7));
        values.push_sorted(AttributeId(4), CoercedAttr::Bool(true));

        assert_eq!(Some(&CoercedAttr::Int(7)), values.get(AttributeId(1)));
        assert_eq!(Some(&CoercedAttr::Bool(true)), values.get(AttributeId(4)));
        assert_eq!(None, values.get(AttributeId(0)));
        assert_eq!(None, values.get(AttributeId(2)));
    }

    #[test]
    #[should_panic]
    fn test_out_of_order_push() {
        let mut values = AttrValues::with_capacity(2);
        values.push_sorted(AttributeId(3), CoercedAttr::None);
        values.push_sorted(AttributeId(2), CoercedAttr::None);
    }
}
