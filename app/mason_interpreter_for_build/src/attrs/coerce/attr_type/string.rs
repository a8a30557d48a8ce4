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
        Some(v) => Ok(CoercedAttr::String(ctx.intern_str(v))),
        None => Err(CoercionError::type_error("string", value)),
    }
}

#[cfg(test)]
mod tests {
    use mason_node::attrs::attr_type::AttrType;

    use crate::attrs::coerce::AttrTypeCoerce;
    use crate::attrs::coerce::testing::coercion_ctx;
    use crate::values::RawValue;

    #[test]
    fn test_coerce() {
        let ctx = coercion_ctx();
        let coerced = AttrType::string()
            .coerce_item(&ctx, &RawValue::String("hello".to_owned()))
            .unwrap();
        assert_eq!("\"hello\"", coerced.to_string());
        assert!(
            AttrType::string()
                .coerce_item(&ctx, &RawValue::List(vec![]))
                .is_err()
        );
    }
}
