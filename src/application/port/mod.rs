// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the viewer core remains
//! independent of concrete environments.
//!
//! # Available Ports
//!
//! - [`catalog`]: Loading the media list from the document store
//! - [`host`]: Global side effects owned by an open viewer (scroll lock,
//!   cancel-key listener)
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Traits are `Send + Sync` so the viewer can live on a tokio runtime
//! - Fallible methods return `Result` with port-specific error types

pub mod catalog;
pub mod host;

// Re-export main types for convenience
pub use catalog::{CatalogError, MediaSource};
pub use host::ViewerHost;
