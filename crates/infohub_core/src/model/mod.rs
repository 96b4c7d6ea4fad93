//! Catalog domain model.
//!
//! # Responsibility
//! - Define the article record rendered by catalog and bookmark views.
//! - Define the ordered category set shown by the category chooser.
//!
//! # Invariants
//! - Every article is identified by a stable `ArticleId`.
//! - `is_bookmarked` is the only article field mutated after seeding.

pub mod article;
pub mod category;
