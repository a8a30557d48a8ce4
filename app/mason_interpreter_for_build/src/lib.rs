/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The declaration-language front end: build-file syntax restriction, rule
//! functions that record pending declarations, and attribute coercion from
//! raw parsed values to typed attributes.

pub mod attrs;
pub mod events;
pub mod parser;
pub mod rule_function;
pub mod syntax;
pub mod values;
