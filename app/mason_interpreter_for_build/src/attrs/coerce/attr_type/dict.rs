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
    key: &AttrType,
    value_type: &AttrType,
    ctx: &dyn AttrCoercionContext,
    value: &RawValue,
) -> anyhow::Result<CoercedAttr> {
    match value.unpack_dict() {
        Some(entries) => Ok(CoercedAttr::Dict(
            entries
                .iter()
                .map(|(k, v)| Ok((key.coerce_item(ctx, k)?, value_type.coerce_item(ctx, v)?)))
                .collect::<anyhow::Result<Vec<_>>>()?
                .into_boxed_slice(),
        )),
        None => Err(CoercionError::type_error("dict", value)),
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
        let ty = AttrType::dict(AttrType::string(), AttrType::int());
        let coerced = ty
            .coerce_item(
                &ctx,
                &RawValue::Dict(vec![(
                    RawValue::String("a".to_owned()),
                    RawValue::Int(1),
                )]),
            )
            .unwrap();
        assert_eq!("{\"a\": 1}", coerced.to_string());
        assert!(
            ty.coerce_item(
                &ctx,
                &RawValue::Dict(vec![(RawValue::Int(1), RawValue::Int(1))])
            )
            .is_err()
        );
    }
}
