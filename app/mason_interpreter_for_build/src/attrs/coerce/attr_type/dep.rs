/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_node::attrs::coerced_attr::CoercedAttr;
use mason_node::attrs::coercion_context::AttrCoercionContext;

use crate::attrs::coerce::error::CoercionError;
use crate::values::RawValue;

pub(crate) fn coerce(
    ctx: &dyn AttrCoercionContext,
    value: &RawValue,
) -> anyhow::Result<CoercedAttr> {
    match value.unpack_str() {
        Some(label) => Ok(CoercedAttr::Dep(ctx.coerce_label(label)?)),
        None => Err(CoercionError::type_error("string", value)),
    }
}
