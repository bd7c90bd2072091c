// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`catalog`]: TOML catalog file (implements [`MediaSource`])
//! - [`host`]: Logging host (implements [`ViewerHost`])
//!
//! [`MediaSource`]: crate::application::port::MediaSource
//! [`ViewerHost`]: crate::application::port::ViewerHost

pub mod catalog;
pub mod host;

// Re-export main types for convenience
pub use catalog::TomlCatalog;
pub use host::TracingHost;
