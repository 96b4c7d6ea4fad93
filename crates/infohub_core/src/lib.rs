//! Core domain logic for the Information Hub catalog.
//! This crate is the single source of truth for catalog derivation rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;
pub mod view;

pub use config::{CategoryOrder, SessionConfig, ALL_ARTICLES_HEADING};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::category::{CategoryError, CategorySelection, CategorySet, WILDCARD_CATEGORY};
pub use search::filter::{matches, ArticleFilter, FilterState};
pub use seed::{default_articles, default_categories, parse_seed_json, SeedError};
pub use service::catalog_session::{
    CatalogChange, CatalogIntent, CatalogObserver, CatalogSession, CatalogSnapshot, SessionError,
    SessionResult, SubscriptionId,
};
pub use store::article_store::{ArticleStore, StoreError, StoreResult};
pub use view::catalog::{bookmarked_articles, visible_articles, ArticleView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
