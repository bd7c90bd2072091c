// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Events go to stderr through a compact `tracing-subscriber` fmt layer.
//! `RUST_LOG` takes precedence over the configured filter.

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Builds the filter: `RUST_LOG` first, then `configured`, then the default.
fn build_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber.
///
/// Returns false if a subscriber was already installed.
pub fn init(configured: &str) -> bool {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    let installed = tracing_subscriber::registry()
        .with(build_filter(configured))
        .with(stderr_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = configured, "Logging initialized");
    }
    installed
}
