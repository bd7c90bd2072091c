// SPDX-License-Identifier: MPL-2.0
//! Client-side gallery search.
//!
//! Text is normalized (lowercased, Latin diacritics folded to ASCII,
//! whitespace collapsed) on both sides before a plain substring test.

use super::types::MediaItem;
use nucleo_matcher::chars;

/// Normalizes text for case- and accent-insensitive matching.
///
/// ```
/// use lightbox_dismiss::domain::media::normalize;
///
/// assert_eq!(normalize("  Équipe   Réserve "), "equipe reserve");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !normalized.is_empty();
            continue;
        }
        if pending_space {
            normalized.push(' ');
            pending_space = false;
        }
        normalized.extend(chars::normalize(c).to_lowercase());
    }

    normalized
}

/// A normalized search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: normalize(raw),
        }
    }

    /// Returns true if the query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns true if the title, opponent or any contributor contains the query.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        if self.is_empty() {
            return true;
        }

        let contains = |field: &str| normalize(field).contains(&self.needle);

        contains(item.title())
            || item.opponent().is_some_and(contains)
            || item.contributors().iter().any(|name| contains(name))
    }
}

/// Returns the items matching `query`, preserving their order.
#[must_use]
pub fn filter<'a, T>(items: &'a [T], query: &SearchQuery) -> Vec<&'a T>
where
    T: AsRef<MediaItem>,
{
    items
        .iter()
        .filter(|item| query.matches((*item).as_ref()))
        .collect()
}

impl AsRef<MediaItem> for MediaItem {
    fn as_ref(&self) -> &MediaItem {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::MediaId;

    fn items() -> Vec<MediaItem> {
        vec![
            MediaItem::new(MediaId::new("1"), "Opening Goal", "1.mp4", "1.jpg")
                .with_opponent("Atlético Sur"),
            MediaItem::new(MediaId::new("2"), "Late Save", "2.mp4", "2.jpg")
                .with_contributors(vec!["Zoë Müller".into()]),
            MediaItem::new(MediaId::new("3"), "Penalty shootout", "3.mp4", "3.jpg"),
        ]
    }

    #[test]
    fn normalize_folds_case_and_accents() {
        assert_eq!(normalize("ÀÉÎÕÜ"), "aeiou");
        assert_eq!(normalize("Zoë"), "zoe");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("\tlate \n  save  "), "late save");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let items = items();
        let result = filter(&items, &SearchQuery::new("  "));
        let ids: Vec<_> = result.iter().map(|item| item.id().as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn query_matches_title_opponent_and_contributors() {
        let items = items();

        let by_title = filter(&items, &SearchQuery::new("PENALTY"));
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id().as_str(), "3");

        let by_opponent = filter(&items, &SearchQuery::new("atletico"));
        assert_eq!(by_opponent[0].id().as_str(), "1");

        let by_contributor = filter(&items, &SearchQuery::new("muller"));
        assert_eq!(by_contributor[0].id().as_str(), "2");
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        let items = items();
        assert!(filter(&items, &SearchQuery::new("corner kick")).is_empty());
    }
}
