// SPDX-License-Identifier: MPL-2.0
//! TOML-backed media catalog.
//!
//! Reads a document of `[[item]]` tables:
//!
//! ```toml
//! [[item]]
//! id = "final-2024"
//! title = "Cup final highlights"
//! media = "https://cdn.example.org/final.mp4"
//! thumbnail = "https://cdn.example.org/final.jpg"
//! opponent = "Riverside"
//! match_date = "2024-05-12"
//! contributors = ["Ana", "Lee"]
//! ```

use crate::application::port::{CatalogError, MediaSource};
use crate::domain::media::{MediaId, MediaItem};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    item: Vec<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ItemRecord {
    id: String,
    title: String,
    media: String,
    thumbnail: String,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(default)]
    match_date: Option<NaiveDate>,
    #[serde(default)]
    contributors: Vec<String>,
}

impl From<ItemRecord> for MediaItem {
    fn from(record: ItemRecord) -> Self {
        let mut item = MediaItem::new(
            MediaId::new(record.id),
            record.title,
            record.media,
            record.thumbnail,
        )
        .with_contributors(record.contributors);

        if let Some(opponent) = record.opponent {
            item = item.with_opponent(opponent);
        }
        if let Some(date) = record.match_date {
            item = item.with_match_date(date);
        }
        item
    }
}

/// Parses a catalog document.
///
/// # Errors
///
/// Returns [`CatalogError::Malformed`] if the text is not a valid catalog.
pub fn parse(content: &str) -> Result<Vec<MediaItem>, CatalogError> {
    let document: CatalogDocument =
        toml::from_str(content).map_err(|err| CatalogError::Malformed(err.to_string()))?;
    Ok(document.item.into_iter().map(MediaItem::from).collect())
}

/// [`MediaSource`] reading a TOML catalog file.
#[derive(Debug, Clone)]
pub struct TomlCatalog {
    path: PathBuf,
}

impl TomlCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MediaSource for TomlCatalog {
    fn load(&self) -> Result<Vec<MediaItem>, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => CatalogError::NotFound,
            _ => CatalogError::IoError(err.to_string()),
        })?;

        let items = parse(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            count = items.len(),
            "Catalog loaded"
        );
        Ok(items)
    }
}
