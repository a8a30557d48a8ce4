/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_node::attrs::coerced_attr::CoercedAttr;

use crate::attrs::coerce::error::CoercionError;
use crate::values::RawValue;

pub(crate) fn coerce(value: &RawValue) -> anyhow::Result<CoercedAttr> {
    match value.unpack_int() {
        Some(v) => Ok(CoercedAttr::Int(v)),
        None => Err(CoercionError::type_error("int", value)),
    }
}
