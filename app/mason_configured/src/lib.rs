/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Variant resolution: deciding, for a concrete requested target, which
//! flavors must be completed from domain defaults (as redirects to a
//! differently-flavored sibling), which single platform represents the build,
//! how flavors propagate to dependency edges, and whether a debug-symbol
//! companion target is synthesized.

pub mod completion;
pub mod debug_format;
pub mod frameworks;
pub mod outcome;
pub mod platform;
pub mod propagation;
pub mod resolver;
