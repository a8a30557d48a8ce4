/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! The rule and attribute data model: attribute types and specs, coerced and
//! configured attribute values, rule schemas, and the unconfigured/configured
//! node types handed to the graph layer.

pub mod attrs;
pub mod nodes;
pub mod rule;
