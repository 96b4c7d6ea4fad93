//! Catalog filtering entry points.
//!
//! # Responsibility
//! - Expose the pure filter predicate over one article.
//! - Keep search normalization rules inside core.

pub mod filter;
