// SPDX-License-Identifier: MPL-2.0
//! Gallery list state: the loaded catalog, its status and the search query.

use crate::application::port::CatalogError;
use crate::domain::media::{filter, MediaId, MediaItem, SearchQuery};
use std::sync::Arc;

/// Load status of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Waiting for the catalog.
    #[default]
    Loading,
    /// The catalog failed to load or holds no items.
    Empty,
    /// Items are available.
    Ready,
}

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// The catalog finished loading.
    Loaded(Result<Vec<MediaItem>, CatalogError>),
    /// The search field changed.
    QueryChanged(String),
}

/// Gallery list state.
#[derive(Debug, Clone, Default)]
pub struct State {
    status: Status,
    items: Vec<Arc<MediaItem>>,
    raw_query: String,
    query: SearchQuery,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Loaded(Ok(items)) if items.is_empty() => {
                tracing::warn!("Catalog holds no items");
                self.items.clear();
                self.status = Status::Empty;
            }
            Message::Loaded(Ok(items)) => {
                tracing::info!(count = items.len(), "Catalog loaded");
                self.items = items.into_iter().map(Arc::new).collect();
                self.status = Status::Ready;
            }
            Message::Loaded(Err(err)) => {
                tracing::warn!(error = %err, "Catalog failed to load");
                self.items.clear();
                self.status = Status::Empty;
            }
            Message::QueryChanged(raw) => {
                self.query = SearchQuery::new(&raw);
                self.raw_query = raw;
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The query as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.raw_query
    }

    /// Items matching the current query, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&Arc<MediaItem>> {
        filter(&self.items, &self.query)
    }

    /// Looks up an item by id, ignoring the query.
    #[must_use]
    pub fn find(&self, id: &MediaId) -> Option<Arc<MediaItem>> {
        self.items.iter().find(|item| item.id() == id).cloned()
    }
}
