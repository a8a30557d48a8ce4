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
use crate::values::RawValue;

pub(crate) fn coerce(
    inner: &AttrType,
    ctx: &dyn AttrCoercionContext,
    value: &RawValue,
) -> anyhow::Result<CoercedAttr> {
    if value.is_none() {
        Ok(CoercedAttr::None)
    } else {
        inner.coerce_item(ctx, value)
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
        let ty = AttrType::option(AttrType::int());
        assert_eq!(
            CoercedAttr::None,
            ty.coerce_item(&ctx, &RawValue::None).unwrap()
        );
        assert_eq!(
            CoercedAttr::Int(5),
            ty.coerce_item(&ctx, &RawValue::Int(5)).unwrap()
        );
        assert!(ty.coerce_item(&ctx, &RawValue::Bool(true)).is_err());
    }
}
