//! Search-and-category filter predicate.
//!
//! # Responsibility
//! - Hold the ambient filter inputs (search text, category selection).
//! - Decide whether one article is visible under those inputs.
//!
//! # Invariants
//! - Matching is pure substring containment after Unicode lower-casing.
//! - Title and description match independently (logical OR).
//! - Category match is exact equality unless the selection is the wildcard.
//! - The search text is never trimmed; only case is normalized.

use crate::model::article::Article;
use crate::model::category::CategorySelection;

/// Ambient filter inputs owned by a catalog session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    /// Raw search text as typed by the user.
    pub search_query: String,
    /// Current category selection. Defaults to the wildcard.
    pub category: CategorySelection,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, category: CategorySelection) -> Self {
        Self {
            search_query: search_query.into(),
            category,
        }
    }

    /// Returns whether this state leaves every article visible.
    pub fn is_unfiltered(&self) -> bool {
        self.search_query.is_empty() && self.category.is_wildcard()
    }

    /// Compiles the state into a reusable predicate.
    ///
    /// The search text is lower-cased once here instead of per article.
    pub fn compile(&self) -> ArticleFilter<'_> {
        ArticleFilter {
            needle: self.search_query.to_lowercase(),
            category: &self.category,
        }
    }
}

/// Compiled predicate borrowed from one [`FilterState`].
#[derive(Debug, Clone)]
pub struct ArticleFilter<'a> {
    needle: String,
    category: &'a CategorySelection,
}

impl ArticleFilter<'_> {
    /// Text AND category match.
    pub fn test(&self, article: &Article) -> bool {
        self.matches_text(article) && self.category.accepts(&article.category)
    }

    fn matches_text(&self, article: &Article) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        article.title.to_lowercase().contains(&self.needle)
            || article.description.to_lowercase().contains(&self.needle)
    }
}

/// Returns whether `article` is visible under `filter`.
pub fn matches(article: &Article, filter: &FilterState) -> bool {
    filter.compile().test(article)
}
