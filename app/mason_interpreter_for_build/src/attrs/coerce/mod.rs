/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Conversion of raw declaration-language values into typed, coerced
//! attribute values. Coercion is configuration-independent: its result is a
//! pure function of the raw value and the declaring package, which is what
//! lets a caching layer key coerced values without a configuration.

pub mod attr_type;
pub mod ctx;
pub mod error;
pub mod node;
pub mod testing;

use mason_node::attrs::attr_type::AttrType;
use mason_node::attrs::coerced_attr::CoercedAttr;
use mason_node::attrs::coercion_context::AttrCoercionContext;

use crate::values::RawValue;

pub trait AttrTypeCoerce {
    fn coerce_item(
        &self,
        ctx: &dyn AttrCoercionContext,
        value: &RawValue,
    ) -> anyhow::Result<CoercedAttr>;
}

impl AttrTypeCoerce for AttrType {
    fn coerce_item(
        &self,
        ctx: &dyn AttrCoercionContext,
        value: &RawValue,
    ) -> anyhow::Result<CoercedAttr> {
        match self {
            AttrType::Bool => attr_type::bool::coerce(value),
            AttrType::Int => attr_type::int::coerce(value),
            AttrType::String => attr_type::string::coerce(ctx, value),
            AttrType::List(inner) => attr_type::list::coerce(inner, ctx, value),
            AttrType::Dict(kv) => attr_type::dict::coerce(&kv.0, &kv.1, ctx, value),
            AttrType::Option(inner) => attr_type::option::coerce(inner, ctx, value),
            AttrType::Dep => attr_type::dep::coerce(ctx, value),
            AttrType::Source => attr_type::source::coerce(ctx, value),
        }
    }
}
