//! Session configuration.
//!
//! # Responsibility
//! - Hold the wildcard label and how the category set is built.
//!
//! # Invariants
//! - Defaults reproduce the built-in catalog chooser (`Все` first).

use crate::model::article::Article;
use crate::model::category::{CategoryError, CategorySet, WILDCARD_CATEGORY};
use crate::seed::default_categories;

/// Heading shown when the wildcard is selected.
pub const ALL_ARTICLES_HEADING: &str = "Все статьи";

/// Source of the category chooser order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryOrder {
    /// Derive categories from the seeded articles, first appearance first.
    #[default]
    FirstAppearance,
    /// Fixed known-category list; seeded articles must use only these.
    Explicit(Vec<String>),
}

/// Catalog session options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub wildcard_label: String,
    pub all_articles_heading: String,
    pub category_order: CategoryOrder,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            wildcard_label: WILDCARD_CATEGORY.to_string(),
            all_articles_heading: ALL_ARTICLES_HEADING.to_string(),
            category_order: CategoryOrder::FirstAppearance,
        }
    }
}

impl SessionConfig {
    /// Config for the built-in dataset and its fixed category list.
    pub fn built_in() -> Self {
        Self::default().with_known_categories(default_categories())
    }

    pub fn with_known_categories<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_order =
            CategoryOrder::Explicit(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_wildcard_label(mut self, label: impl Into<String>) -> Self {
        self.wildcard_label = label.into();
        self
    }

    /// Builds the category set for `articles` under this config.
    pub fn build_categories(&self, articles: &[Article]) -> Result<CategorySet, CategoryError> {
        match &self.category_order {
            CategoryOrder::FirstAppearance => {
                CategorySet::from_articles(self.wildcard_label.as_str(), articles)
            }
            CategoryOrder::Explicit(labels) => {
                CategorySet::new(self.wildcard_label.as_str(), labels.iter().cloned())
            }
        }
    }

    pub fn has_explicit_categories(&self) -> bool {
        matches!(self.category_order, CategoryOrder::Explicit(_))
    }
}
