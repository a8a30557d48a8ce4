/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use allocative::Allocative;
use itertools::Itertools;

/// A raw declaration-language value as handed to a rule function by the
/// evaluator: not yet checked against any attribute type.
#[derive(Clone, Debug, Eq, PartialEq, Allocative)]
pub enum RawValue {
    None,
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<RawValue>),
    Dict(Vec<(RawValue, RawValue)>),
}

impl RawValue {
    /// The type name used in diagnostics, matching what the declaration
    /// language calls the value.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::None => "NoneType",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::String(_) => "string",
            RawValue::List(_) => "list",
            RawValue::Dict(_) => "dict",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RawValue::None)
    }

    pub fn unpack_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn unpack_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn unpack_str(&self) -> Option<&str> {
        match self {
            RawValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn unpack_list(&self) -> Option<&[RawValue]> {
        match self {
            RawValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn unpack_dict(&self) -> Option<&[(RawValue, RawValue)]> {
        match self {
            RawValue::Dict(v) => Some(v),
            _ => None,
        }
    }
}

impl Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::None => write!(f, "None"),
            RawValue::Bool(true) => write!(f, "True"),
            RawValue::Bool(false) => write!(f, "False"),
            RawValue::Int(v) => write!(f, "{}", v),
            RawValue::String(v) => write!(f, "\"{}\"", v),
            RawValue::List(items) => write!(f, "[{}]", items.iter().join(", ")),
            RawValue::Dict(entries) => write!(
                f,
                "{{{}}}",
                entries.iter().map(|(k, v)| format!("{}: {}", k, v)).join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawValue;

    #[test]
    fn test_display() {
        let value = RawValue::List(vec![
            RawValue::String("a".to_owned()),
            RawValue::Bool(false),
            RawValue::None,
        ]);
        assert_eq!("[\"a\", False, None]", value.to_string());
        assert_eq!("list", value.type_name());
    }
}
