/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

pub mod attr;
pub mod attr_type;
pub mod coerced_attr;
pub mod coercion_context;
pub mod configuration_context;
pub mod configured_attr;
pub mod spec;
pub mod values;
