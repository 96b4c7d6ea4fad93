//! Article store and bookmark mutation protocol.
//!
//! # Responsibility
//! - Validate seed data once (unique ids, known categories).
//! - Keep article order stable for every derived view.
//! - Flip exactly one bookmark flag per effective toggle.
//!
//! # Invariants
//! - Unknown ids never fail and never touch other articles.
//! - `revision` increases by one per effective toggle and never otherwise.

use crate::model::article::{Article, ArticleId};
use crate::model::category::CategorySet;
use log::debug;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Seed validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    DuplicateArticleId(ArticleId),
    /// Article category is not a known category.
    UnknownCategory {
        id: ArticleId,
        category: String,
    },
    /// Article category reuses the wildcard label.
    WildcardCategory(ArticleId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateArticleId(id) => write!(f, "duplicate article id: {id}"),
            Self::UnknownCategory { id, category } => {
                write!(f, "article {id} has unknown category `{category}`")
            }
            Self::WildcardCategory(id) => {
                write!(f, "article {id} uses the wildcard label as its category")
            }
        }
    }
}

impl Error for StoreError {}

/// Seeded, session-lifetime article collection.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    revision: u64,
}

/// Stores compare by content only; `revision` is change bookkeeping.
impl PartialEq for ArticleStore {
    fn eq(&self, other: &Self) -> bool {
        self.articles == other.articles
    }
}

impl Eq for ArticleStore {}

impl ArticleStore {
    /// Seeds a store, trusting categories but rejecting duplicate ids.
    pub fn seed(articles: Vec<Article>) -> StoreResult<Self> {
        ensure_unique_ids(&articles)?;
        Ok(Self {
            articles,
            revision: 0,
        })
    }

    /// Seeds a store whose categories must all belong to `categories`.
    pub fn seed_with_categories(
        articles: Vec<Article>,
        categories: &CategorySet,
    ) -> StoreResult<Self> {
        for article in &articles {
            if article.category == categories.wildcard() {
                return Err(StoreError::WildcardCategory(article.id));
            }
            if !categories.contains(&article.category) {
                return Err(StoreError::UnknownCategory {
                    id: article.id,
                    category: article.category.clone(),
                });
            }
        }
        Self::seed(articles)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Count of effective mutations since seeding.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All articles in seed order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn get(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    /// Flips the bookmark of article `id` in place.
    ///
    /// Returns the new flag, or `None` when no article has this id.
    pub fn toggle_bookmark(&mut self, id: ArticleId) -> Option<bool> {
        let Some(article) = self.articles.iter_mut().find(|article| article.id == id) else {
            debug!("event=bookmark_toggle module=store status=noop id={id}");
            return None;
        };

        let is_bookmarked = article.toggle_bookmark();
        self.revision += 1;
        debug!(
            "event=bookmark_toggle module=store status=ok id={id} is_bookmarked={is_bookmarked} revision={}",
            self.revision
        );
        Some(is_bookmarked)
    }

    /// Value-returning form of [`ArticleStore::toggle_bookmark`].
    ///
    /// `self` is left untouched; an unknown id yields an equal copy.
    pub fn with_bookmark_toggled(&self, id: ArticleId) -> Self {
        let mut next = self.clone();
        next.toggle_bookmark(id);
        next
    }

    pub fn bookmarked_count(&self) -> usize {
        self.articles
            .iter()
            .filter(|article| article.is_bookmarked)
            .count()
    }
}

fn ensure_unique_ids(articles: &[Article]) -> StoreResult<()> {
    let mut seen = BTreeSet::new();
    for article in articles {
        if !seen.insert(article.id) {
            return Err(StoreError::DuplicateArticleId(article.id));
        }
    }
    Ok(())
}
