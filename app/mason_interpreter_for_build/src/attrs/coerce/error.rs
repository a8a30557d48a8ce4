/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use crate::values::RawValue;

#[derive(Debug, thiserror::Error)]
pub enum CoercionError {
    #[error("Expected value of type `{0}`, got value with type `{1}` (value was `{2}`)")]
    TypeError(String, String, String),
    #[error("Expected one of `{0}`, got `{1}`")]
    OneOf(String, String),
    #[error("SourcePath cannot contain an absolute path: `{0}`")]
    AbsolutePath(String),
}

impl CoercionError {
    pub fn type_error(expected_type: &str, value: &RawValue) -> anyhow::Error {
        CoercionError::TypeError(
            expected_type.to_owned(),
            value.type_name().to_owned(),
            value.to_string(),
        )
        .into()
    }
}
