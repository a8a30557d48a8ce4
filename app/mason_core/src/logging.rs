/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under both the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree and the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree.
 */

use anyhow::Context;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Initialize tracing output for the process.
///
/// By default only warnings and errors are shown; `MASON_LOG` overrides the
/// filter with standard `tracing_subscriber` directive syntax.
pub fn init_tracing_for_writer<W>(writer: W) -> anyhow::Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    const ENV_VAR: &str = "MASON_LOG";

    let filter = match std::env::var(ENV_VAR) {
        Ok(v) => EnvFilter::try_new(v)
            .with_context(|| format!("Failed to parse ${} as a filter", ENV_VAR))?,
        Err(_) => EnvFilter::new("warn"),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}
