// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use chrono::NaiveDate;
use std::fmt;

/// Identifier of a media record in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable media record shown in the gallery and opened in the viewer.
///
/// # Example
///
/// ```
/// use lightbox_dismiss::domain::media::{MediaId, MediaItem};
///
/// let item = MediaItem::new(
///     MediaId::new("final-2024"),
///     "Cup final highlights",
///     "https://cdn.example.org/final.mp4",
///     "https://cdn.example.org/final.jpg",
/// )
/// .with_opponent("Riverside")
/// .with_contributors(vec!["Ana".to_string()]);
///
/// assert_eq!(item.opponent(), Some("Riverside"));
/// assert_eq!(item.contributors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    id: MediaId,
    title: String,
    /// Locator of the playable media.
    media: String,
    /// Locator of the thumbnail image.
    thumbnail: String,
    opponent: Option<String>,
    match_date: Option<NaiveDate>,
    /// Contributor names, in display order.
    contributors: Vec<String>,
}

impl MediaItem {
    /// Creates a record with the required fields; optional ones start empty.
    #[must_use]
    pub fn new(
        id: MediaId,
        title: impl Into<String>,
        media: impl Into<String>,
        thumbnail: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            media: media.into(),
            thumbnail: thumbnail.into(),
            opponent: None,
            match_date: None,
            contributors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_opponent(mut self, opponent: impl Into<String>) -> Self {
        self.opponent = Some(opponent.into());
        self
    }

    #[must_use]
    pub fn with_match_date(mut self, date: NaiveDate) -> Self {
        self.match_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_contributors(mut self, contributors: Vec<String>) -> Self {
        self.contributors = contributors;
        self
    }

    #[must_use]
    pub fn id(&self) -> &MediaId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn media(&self) -> &str {
        &self.media
    }

    #[must_use]
    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    #[must_use]
    pub fn opponent(&self) -> Option<&str> {
        self.opponent.as_deref()
    }

    #[must_use]
    pub fn match_date(&self) -> Option<NaiveDate> {
        self.match_date
    }

    #[must_use]
    pub fn contributors(&self) -> &[String] {
        &self.contributors
    }
}
