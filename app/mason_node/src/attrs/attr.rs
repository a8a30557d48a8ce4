/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::sync::Arc;

use allocative::Allocative;

use crate::attrs::attr_type::AttrType;
use crate::attrs::coerced_attr::CoercedAttr;

/// The declared contract for one attribute of a rule kind: its type, whether
/// it is required, its default, and whether its values contribute dependency
/// edges to the build graph. One of these exists per (rule kind, attribute),
/// created when the rule schema is registered and never mutated.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub struct Attribute {
    coercer: AttrType,
    /// `None` means the attribute is required.
    default: Option<Arc<CoercedAttr>>,
    /// Whether coerced target references in this attribute become graph
    /// edges. Defaults from the type; rules may opt out for attributes they
    /// resolve separately (e.g. a bundle's `deps` whose platform flavoring
    /// the rule controls itself).
    is_dep: bool,
}

impl Attribute {
    /// A required attribute.
    pub fn required(coercer: AttrType) -> Attribute {
        let is_dep = coercer.defines_dep_edges();
        Attribute {
            coercer,
            default: None,
            is_dep,
        }
    }

    /// An optional attribute falling back to `default` when omitted.
    pub fn with_default(coercer: AttrType, default: CoercedAttr) -> Attribute {
        let is_dep = coercer.defines_dep_edges();
        Attribute {
            coercer,
            default: Some(Arc::new(default)),
            is_dep,
        }
    }

    /// Override the dependency-edge hint (the `@Hint(isDep = ...)` of old).
    pub fn with_dep_hint(mut self, is_dep: bool) -> Attribute {
        self.is_dep = is_dep;
        self
    }

    pub fn coercer(&self) -> &AttrType {
        &self.coercer
    }

    pub fn default(&self) -> Option<&Arc<CoercedAttr>> {
        self.default.as_ref()
    }

    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }

    pub fn is_dep(&self) -> bool {
        self.is_dep
    }
}

#[cfg(test)]
mod tests {
    use super::Attribute;
    use crate::attrs::attr_type::AttrType;
    use crate::attrs::coerced_attr::CoercedAttr;

    #[test]
    fn test_dep_hint() {
        let attr = Attribute::required(AttrType::list(AttrType::dep()));
        assert!(attr.is_dep());
        let attr = attr.with_dep_hint(false);
        assert!(!attr.is_dep());
        assert!(!Attribute::required(AttrType::string()).is_dep());
    }

    #[test]
    fn test_optionality() {
        assert!(!Attribute::required(AttrType::string()).is_optional());
        assert!(Attribute::with_default(AttrType::string(), CoercedAttr::None).is_optional());
    }
}
