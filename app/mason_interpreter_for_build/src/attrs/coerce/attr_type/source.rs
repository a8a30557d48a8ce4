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

/// The reference-or-path coercer. Disambiguation is lexical and fixed: a
/// string containing the cell/package separator or starting with the
/// local-target marker names another target's output; anything else is a
/// path relative to the declaring package.
pub(crate) fn coerce(
    ctx: &dyn AttrCoercionContext,
    value: &RawValue,
) -> anyhow::Result<CoercedAttr> {
    let s = match value.unpack_str() {
        Some(s) => s,
        None => return Err(CoercionError::type_error("string", value)),
    };
    if s.contains("//") || s.starts_with(':') {
        Ok(CoercedAttr::SourceLabel(ctx.coerce_label(s)?))
    } else {
        if s.starts_with('/') {
            return Err(CoercionError::AbsolutePath(s.to_owned()).into());
        }
        Ok(CoercedAttr::SourceFile(ctx.coerce_path(s)?))
    }
}
