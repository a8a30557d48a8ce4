/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

//! Core data model for the mason configuration front-end: cells, packages,
//! targets, flavors and configurations. Everything in this crate is immutable
//! once constructed and cheap to clone.

pub mod cells;
pub mod configuration;
pub mod flavors;
pub mod fs;
pub mod logging;
pub mod package;
pub mod pattern;
pub mod source_path;
pub mod target;
