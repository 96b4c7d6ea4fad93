//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical catalog entry shared by all derived views.
//! - Provide the bookmark flip used by the mutation protocol.
//!
//! # Invariants
//! - `id` is stable and never reused for another article in one store.
//! - `read_time` and `date` are display-only and never interpreted by core.

use serde::{Deserialize, Serialize};

/// Stable identifier of one catalog article.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = i64;

/// Canonical catalog entry.
///
/// Wire names follow the data-source payload (`readTime`, `isBookmarked`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable id, unique within one article store.
    pub id: ArticleId,
    /// Headline, matched by free-text search.
    pub title: String,
    /// Short summary, matched by free-text search.
    pub description: String,
    /// Category label, matched exactly by the category filter.
    pub category: String,
    /// Display-only reading time text (for example `5 мин`).
    pub read_time: String,
    /// Display-only publication date text.
    pub date: String,
    /// Bookmark flag. Absent in seed payloads means `false`.
    #[serde(default)]
    pub is_bookmarked: bool,
}

impl Article {
    /// Creates a non-bookmarked article.
    pub fn new(
        id: ArticleId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        read_time: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: category.into(),
            read_time: read_time.into(),
            date: date.into(),
            is_bookmarked: false,
        }
    }

    /// Builder-style helper used by seed data.
    pub fn bookmarked(mut self, is_bookmarked: bool) -> Self {
        self.is_bookmarked = is_bookmarked;
        self
    }

    /// Flips the bookmark flag and returns its new value.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.is_bookmarked = !self.is_bookmarked;
        self.is_bookmarked
    }
}
