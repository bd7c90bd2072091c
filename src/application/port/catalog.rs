// SPDX-License-Identifier: MPL-2.0
//! Media catalog port definition.
//!
//! This module defines the [`MediaSource`] trait for loading the media list
//! shown by the gallery. Records are supplied by an external document store;
//! infrastructure adapters implement this trait to reach it.

use crate::domain::media::MediaItem;
use std::fmt;

// =============================================================================
// CatalogError
// =============================================================================

/// Errors that can occur while loading the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog does not exist.
    NotFound,

    /// The catalog could not be read (I/O error).
    IoError(String),

    /// The catalog was read but its content is invalid.
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound => write!(f, "Catalog not found"),
            CatalogError::IoError(msg) => write!(f, "I/O error: {msg}"),
            CatalogError::Malformed(msg) => write!(f, "Malformed catalog: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// =============================================================================
// MediaSource Trait
// =============================================================================

/// Trait for loading media records.
///
/// # Example
///
/// ```ignore
/// use lightbox_dismiss::application::port::MediaSource;
///
/// fn count_items(source: &impl MediaSource) -> usize {
///     source.load().map(|items| items.len()).unwrap_or(0)
/// }
/// ```
pub trait MediaSource: Send + Sync {
    /// Loads every record, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or its content
    /// cannot be decoded.
    fn load(&self) -> Result<Vec<MediaItem>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        assert_eq!(CatalogError::NotFound.to_string(), "Catalog not found");
        assert_eq!(
            CatalogError::IoError("denied".into()).to_string(),
            "I/O error: denied"
        );
        assert_eq!(
            CatalogError::Malformed("line 3".into()).to_string(),
            "Malformed catalog: line 3"
        );
    }
}
