// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains the media record shown by the gallery and the
//! viewer, and the text matching used to filter the gallery.

pub mod search;
pub mod types;

// Re-export commonly used types
pub use search::{filter, normalize, SearchQuery};
pub use types::{MediaId, MediaItem};
