//! Category set and category selection.
//!
//! # Responsibility
//! - Keep the ordered label list rendered by the category chooser.
//! - Resolve chooser labels into a typed selection for the filter predicate.
//!
//! # Invariants
//! - The wildcard label is always first and never names a real category.
//! - Labels are unique; order is display order.

use crate::model::article::Article;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default wildcard label ("all categories").
pub const WILDCARD_CATEGORY: &str = "Все";

/// Typed category filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    /// Wildcard; disables category filtering.
    #[default]
    All,
    /// Exact, case-sensitive category label.
    Category(String),
}

impl CategorySelection {
    /// Returns whether an article category passes this selection.
    pub fn accepts(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Category label errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// Label is empty after trimming.
    EmptyLabel,
    /// Label appears twice in an explicit category list.
    DuplicateLabel(String),
    /// A real category reuses the wildcard label.
    WildcardCollision(String),
    /// Label is not a member of the category set.
    UnknownCategory(String),
}

impl Display for CategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "category label must not be empty"),
            Self::DuplicateLabel(label) => write!(f, "category label is duplicated: `{label}`"),
            Self::WildcardCollision(label) => {
                write!(f, "category label collides with wildcard: `{label}`")
            }
            Self::UnknownCategory(label) => write!(f, "unknown category: `{label}`"),
        }
    }
}

impl Error for CategoryError {}

/// Ordered category labels, wildcard first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    wildcard: String,
    labels: Vec<String>,
}

impl CategorySet {
    /// Builds a set from an explicit, ordered list of known categories.
    ///
    /// # Errors
    /// - `EmptyLabel` for a blank wildcard or category.
    /// - `DuplicateLabel` when a label repeats.
    /// - `WildcardCollision` when a category equals the wildcard.
    pub fn new<I, S>(wildcard: impl Into<String>, labels: I) -> Result<Self, CategoryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let wildcard = validate_wildcard(wildcard.into())?;
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for label in labels {
            let label = label.into();
            check_label(&wildcard, &label)?;
            if !seen.insert(label.clone()) {
                return Err(CategoryError::DuplicateLabel(label));
            }
            ordered.push(label);
        }

        Ok(Self {
            wildcard,
            labels: ordered,
        })
    }

    /// Derives the set from the categories present in `articles`, in order of
    /// first appearance.
    pub fn from_articles(
        wildcard: impl Into<String>,
        articles: &[Article],
    ) -> Result<Self, CategoryError> {
        let wildcard = validate_wildcard(wildcard.into())?;
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for article in articles {
            check_label(&wildcard, &article.category)?;
            if seen.insert(article.category.as_str()) {
                ordered.push(article.category.clone());
            }
        }

        Ok(Self {
            wildcard,
            labels: ordered,
        })
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    /// Real category labels, excluding the wildcard.
    pub fn categories(&self) -> &[String] {
        &self.labels
    }

    /// All chooser labels, wildcard first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.wildcard.as_str()).chain(self.labels.iter().map(String::as_str))
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.labels().map(str::to_string).collect()
    }

    /// Number of chooser labels including the wildcard.
    pub fn len(&self) -> usize {
        self.labels.len() + 1
    }

    /// Always `false`: the wildcard is a member of every set.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, label: &str) -> bool {
        label == self.wildcard || self.labels.iter().any(|known| known == label)
    }

    /// Resolves a chooser label into a typed selection.
    pub fn resolve(&self, label: &str) -> Result<CategorySelection, CategoryError> {
        if label == self.wildcard {
            return Ok(CategorySelection::All);
        }
        if self.labels.iter().any(|known| known == label) {
            return Ok(CategorySelection::Category(label.to_string()));
        }
        Err(CategoryError::UnknownCategory(label.to_string()))
    }

    /// Returns the chooser label for a selection.
    pub fn label_of<'a>(&'a self, selection: &'a CategorySelection) -> &'a str {
        match selection {
            CategorySelection::All => &self.wildcard,
            CategorySelection::Category(label) => label,
        }
    }
}

fn validate_wildcard(wildcard: String) -> Result<String, CategoryError> {
    if wildcard.trim().is_empty() {
        return Err(CategoryError::EmptyLabel);
    }
    Ok(wildcard)
}

fn check_label(wildcard: &str, label: &str) -> Result<(), CategoryError> {
    if label.trim().is_empty() {
        return Err(CategoryError::EmptyLabel);
    }
    if label == wildcard {
        return Err(CategoryError::WildcardCollision(label.to_string()));
    }
    Ok(())
}
