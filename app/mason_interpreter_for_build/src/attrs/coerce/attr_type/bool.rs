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
    match value.unpack_bool() {
        Some(v) => Ok(CoercedAttr::Bool(v)),
        None => Err(CoercionError::type_error("bool", value)),
    }
}

#[cfg(test)]
mod tests {
    use mason_node::attrs::attr_type::AttrType;
    use mason_node::attrs::coerced_attr::CoercedAttr;

    use crate::attrs::coerce::AttrTypeCoerce;
    use crate::attrs::coerce::testing::coercion_ctx;
    use crate::values::RawValue;

    #[test]
    fn test_coerce() {
        let ctx = coercion_ctx();
        assert_eq!(
            CoercedAttr::Bool(true),
            AttrType::bool()
                .coerce_item(&ctx, &RawValue::Bool(true))
                .unwrap()
        );
        assert!(AttrType::bool().coerce_item(&ctx, &RawValue::Int(1)).is_err());
    }
}
