/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use mason_core::configuration::ConfigurationData;

/// The configuration pair applied when coerced values are configured.
/// Implementations must be pure: results for a given (value, configuration)
/// pair are memoized and reused by concurrent resolution requests.
pub trait AttrConfigurationContext {
    /// The configuration dependency edges are resolved in.
    fn cfg(&self) -> ConfigurationData;

    /// The host configuration, used for tools that run during the build.
    fn exec_cfg(&self) -> ConfigurationData;
}

/// A plain (target, host) configuration pair.
#[derive(Debug, Clone, Copy)]
pub struct AttrConfigurationContextImpl {
    cfg: ConfigurationData,
    exec_cfg: ConfigurationData,
}

impl AttrConfigurationContextImpl {
    pub fn new(cfg: ConfigurationData, exec_cfg: ConfigurationData) -> Self {
        AttrConfigurationContextImpl { cfg, exec_cfg }
    }
}

impl AttrConfigurationContext for AttrConfigurationContextImpl {
    fn cfg(&self) -> ConfigurationData {
        self.cfg
    }

    fn exec_cfg(&self) -> ConfigurationData {
        self.exec_cfg
    }
}
