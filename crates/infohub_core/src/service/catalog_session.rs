//! Catalog session use-case service.
//!
//! # Responsibility
//! - Own the article store, category set and filter state of one session.
//! - Apply user intents (search text, category, bookmark toggle).
//! - Derive catalog/bookmark views and notify subscribed observers.
//!
//! # Invariants
//! - The selected category is always a member of the category set.
//! - Search and category intents never touch the article store.
//! - Observers see a snapshot derived after the intent is fully applied.
//! - Log events carry metadata only, never article or search text.

use crate::config::SessionConfig;
use crate::model::article::{Article, ArticleId};
use crate::model::category::{CategoryError, CategorySelection, CategorySet};
use crate::search::filter::FilterState;
use crate::seed::{default_articles, parse_seed_json, SeedError};
use crate::store::article_store::{ArticleStore, StoreError};
use crate::view::catalog::{bookmarked_articles, visible_positions, ArticleView};
use log::{debug, info, warn};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-level error for seeding and intent handling.
#[derive(Debug)]
pub enum SessionError {
    Store(StoreError),
    Category(CategoryError),
    Seed(SeedError),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Category(err) => write!(f, "{err}"),
            Self::Seed(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Category(err) => Some(err),
            Self::Seed(err) => Some(err),
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<CategoryError> for SessionError {
    fn from(value: CategoryError) -> Self {
        Self::Category(value)
    }
}

impl From<SeedError> for SessionError {
    fn from(value: SeedError) -> Self {
        Self::Seed(value)
    }
}

/// Inbound user intent emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogIntent {
    SetSearchQuery { text: String },
    SelectCategory { label: String },
    ToggleBookmark { id: ArticleId },
}

/// Applied state change, delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogChange {
    SearchQueryChanged,
    CategoryChanged {
        label: String,
    },
    /// `is_bookmarked` is `None` when the id matched no article.
    BookmarkToggled {
        id: ArticleId,
        is_bookmarked: Option<bool>,
    },
}

/// Owned bundle of every derived output at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSnapshot {
    pub search_query: String,
    pub selected_category: String,
    /// Wildcard heading (`Все статьи`) or the selected category label.
    pub heading: String,
    /// Chooser labels, wildcard first.
    pub categories: Vec<String>,
    pub visible: Vec<Article>,
    pub visible_count: usize,
    pub bookmarked: Vec<Article>,
    pub bookmarked_count: usize,
    pub store_size: usize,
    pub revision: u64,
}

/// Receives applied changes with the re-derived snapshot.
pub trait CatalogObserver {
    fn on_change(&mut self, change: &CatalogChange, snapshot: &CatalogSnapshot);
}

struct FnObserver<F>(F);

impl<F> CatalogObserver for FnObserver<F>
where
    F: FnMut(&CatalogChange, &CatalogSnapshot),
{
    fn on_change(&mut self, change: &CatalogChange, snapshot: &CatalogSnapshot) {
        (self.0)(change, snapshot)
    }
}

/// Handle returned by [`CatalogSession::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Single-owner session context for the catalog.
pub struct CatalogSession {
    config: SessionConfig,
    store: ArticleStore,
    categories: CategorySet,
    filter: FilterState,
    /// Matching store positions; reset whenever the filter or revision changes.
    visible_cache: OnceCell<Vec<usize>>,
    observers: BTreeMap<SubscriptionId, Box<dyn CatalogObserver + Send>>,
    next_subscription: u64,
}

impl CatalogSession {
    /// Opens a session over `articles`.
    ///
    /// # Errors
    /// - `Category` when the configured or derived category set is invalid.
    /// - `Store` for duplicate ids or articles outside an explicit category list.
    pub fn new(articles: Vec<Article>, config: SessionConfig) -> SessionResult<Self> {
        let categories = config.build_categories(&articles)?;
        let store = if config.has_explicit_categories() {
            ArticleStore::seed_with_categories(articles, &categories)?
        } else {
            ArticleStore::seed(articles)?
        };

        info!(
            "event=session_open module=session status=ok article_count={} category_count={} bookmarked_count={}",
            store.len(),
            categories.categories().len(),
            store.bookmarked_count()
        );

        Ok(Self {
            config,
            store,
            categories,
            filter: FilterState::default(),
            visible_cache: OnceCell::new(),
            observers: BTreeMap::new(),
            next_subscription: 0,
        })
    }

    /// Opens a session over the built-in dataset.
    pub fn with_default_seed() -> SessionResult<Self> {
        Self::new(default_articles(), SessionConfig::built_in())
    }

    /// Opens a session over a JSON seed payload.
    pub fn from_seed_json(payload: &str, config: SessionConfig) -> SessionResult<Self> {
        let articles = parse_seed_json(payload)?;
        Self::new(articles, config)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn search_query(&self) -> &str {
        &self.filter.search_query
    }

    /// Chooser label of the current selection.
    pub fn selected_category(&self) -> &str {
        self.categories.label_of(&self.filter.category)
    }

    pub fn heading(&self) -> &str {
        match &self.filter.category {
            CategorySelection::All => &self.config.all_articles_heading,
            CategorySelection::Category(label) => label,
        }
    }

    /// Replaces the search text. Never fails.
    pub fn set_search_query(&mut self, text: impl Into<String>) -> CatalogChange {
        let text = text.into();
        debug!(
            "event=search_query_set module=session status=ok query_chars={}",
            text.chars().count()
        );
        self.filter.search_query = text;
        self.visible_cache.take();
        self.publish(CatalogChange::SearchQueryChanged)
    }

    /// Selects a category by chooser label.
    ///
    /// # Errors
    /// - `Category(UnknownCategory)` when `label` is not in the category set;
    ///   the current selection is kept.
    pub fn select_category(&mut self, label: &str) -> SessionResult<CatalogChange> {
        let selection = match self.categories.resolve(label) {
            Ok(selection) => selection,
            Err(err) => {
                warn!("event=category_select module=session status=rejected reason=unknown_category");
                return Err(err.into());
            }
        };

        debug!(
            "event=category_select module=session status=ok wildcard={}",
            selection.is_wildcard()
        );
        self.filter.category = selection;
        self.visible_cache.take();
        Ok(self.publish(CatalogChange::CategoryChanged {
            label: label.to_string(),
        }))
    }

    /// Flips one article's bookmark; unknown ids are a no-op.
    pub fn toggle_bookmark(&mut self, id: ArticleId) -> Option<bool> {
        let is_bookmarked = self.store.toggle_bookmark(id);
        if is_bookmarked.is_some() {
            self.visible_cache.take();
        }
        self.publish(CatalogChange::BookmarkToggled { id, is_bookmarked });
        is_bookmarked
    }

    /// Dispatches one inbound intent.
    pub fn apply(&mut self, intent: CatalogIntent) -> SessionResult<CatalogChange> {
        match intent {
            CatalogIntent::SetSearchQuery { text } => Ok(self.set_search_query(text)),
            CatalogIntent::SelectCategory { label } => self.select_category(&label),
            CatalogIntent::ToggleBookmark { id } => {
                let is_bookmarked = self.toggle_bookmark(id);
                Ok(CatalogChange::BookmarkToggled { id, is_bookmarked })
            }
        }
    }

    /// Catalog view under the current filter state.
    ///
    /// Matching positions are memoized per (store revision, filter state).
    pub fn visible_articles(&self) -> ArticleView<'_> {
        let positions = self
            .visible_cache
            .get_or_init(|| visible_positions(&self.store, &self.filter));
        ArticleView::from_positions(&self.store, positions)
    }

    /// Bookmark subview; ignores the filter state.
    pub fn bookmarked_articles(&self) -> ArticleView<'_> {
        bookmarked_articles(&self.store)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        let visible = self.visible_articles();
        let bookmarked = self.bookmarked_articles();
        CatalogSnapshot {
            search_query: self.filter.search_query.clone(),
            selected_category: self.selected_category().to_string(),
            heading: self.heading().to_string(),
            categories: self.categories.to_vec(),
            visible_count: visible.len(),
            visible: visible.to_owned_articles(),
            bookmarked_count: bookmarked.len(),
            bookmarked: bookmarked.to_owned_articles(),
            store_size: self.store.len(),
            revision: self.store.revision(),
        }
    }

    /// Registers an observer called after every applied intent.
    ///
    /// Observers must be `Send` so a session can live behind a process-level lock.
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: CatalogObserver + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Closure form of [`CatalogSession::subscribe`].
    pub fn subscribe_fn<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&CatalogChange, &CatalogSnapshot) + Send + 'static,
    {
        self.subscribe(FnObserver(observer))
    }

    /// Removes an observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn publish(&mut self, change: CatalogChange) -> CatalogChange {
        if self.observers.is_empty() {
            return change;
        }
        let snapshot = self.snapshot();
        for observer in self.observers.values_mut() {
            observer.on_change(&change, &snapshot);
        }
        change
    }
}
