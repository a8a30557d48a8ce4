/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_node::attrs::attr_type::AttrType;
use mason_node::attrs::coerced_attr::CoercedAttr;
use mason_node::attrs::coercion_context::AttrCoercionContext;

use crate::attrs::coerce::AttrTypeCoerce;
use crate::attrs::coerce::error::CoercionError;
use crate::values::RawValue;

pub(crate) fn coerce(
    inner: &AttrType,
    ctx: &dyn AttrCoercionContext,
    value: &RawValue,
) -> anyhow::Result<CoercedAttr> {
    match value.unpack_list() {
        Some(items) => Ok(CoercedAttr::List(
            items
                .iter()
                .map(|item| inner.coerce_item(ctx, item))
                .collect::<anyhow::Result<Vec<_>>>()?
                .into_boxed_slice(),
        )),
        None => Err(CoercionError::type_error("list", value)),
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
        let ty = AttrType::list(AttrType::int());
        let coerced = ty
            .coerce_item(&ctx, &RawValue::List(vec![RawValue::Int(1), RawValue::Int(2)]))
            .unwrap();
        assert_eq!("[1, 2]", coerced.to_string());

        // An element of the wrong type fails the whole list.
        assert!(
            ty.coerce_item(
                &ctx,
                &RawValue::List(vec![RawValue::Int(1), RawValue::Bool(true)])
            )
            .is_err()
        );
        assert!(ty.coerce_item(&ctx, &RawValue::Int(1)).is_err());
    }
}
