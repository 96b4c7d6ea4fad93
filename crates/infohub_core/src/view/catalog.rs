//! Catalog view and bookmark subview derivation.
//!
//! # Responsibility
//! - Apply the filter predicate to every stored article (stable filter).
//! - Select bookmarked articles independent of the filter state.
//!
//! # Invariants
//! - An empty result is a valid view, never an error. Callers distinguish
//!   "empty store" from "no matches" through the store size.

use crate::model::article::{Article, ArticleId};
use crate::search::filter::FilterState;
use crate::store::article_store::ArticleStore;

/// Ordered, borrowed subset of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView<'a> {
    articles: Vec<&'a Article>,
}

impl<'a> ArticleView<'a> {
    /// Builds a view from precomputed store positions.
    ///
    /// Positions outside the store are skipped.
    pub fn from_positions(store: &'a ArticleStore, positions: &[usize]) -> Self {
        let all = store.articles();
        Self {
            articles: positions.iter().filter_map(|&pos| all.get(pos)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Article> + '_ {
        self.articles.iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Article] {
        &self.articles
    }

    pub fn ids(&self) -> Vec<ArticleId> {
        self.articles.iter().map(|article| article.id).collect()
    }

    pub fn contains(&self, id: ArticleId) -> bool {
        self.articles.iter().any(|article| article.id == id)
    }

    /// Clones the viewed articles for callers that outlive the store borrow.
    pub fn to_owned_articles(&self) -> Vec<Article> {
        self.articles.iter().map(|article| (*article).clone()).collect()
    }
}

impl<'a> IntoIterator for ArticleView<'a> {
    type Item = &'a Article;
    type IntoIter = std::vec::IntoIter<&'a Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.into_iter()
    }
}

/// Store positions of every article visible under `filter`.
pub fn visible_positions(store: &ArticleStore, filter: &FilterState) -> Vec<usize> {
    let predicate = filter.compile();
    store
        .iter()
        .enumerate()
        .filter(|(_, article)| predicate.test(article))
        .map(|(pos, _)| pos)
        .collect()
}

/// Filtered catalog view in store order.
pub fn visible_articles<'a>(store: &'a ArticleStore, filter: &FilterState) -> ArticleView<'a> {
    let predicate = filter.compile();
    ArticleView {
        articles: store.iter().filter(|article| predicate.test(article)).collect(),
    }
}

/// Bookmarked articles in store order, ignoring any filter state.
pub fn bookmarked_articles(store: &ArticleStore) -> ArticleView<'_> {
    ArticleView {
        articles: store.iter().filter(|article| article.is_bookmarked).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::{bookmarked_articles, visible_articles, visible_positions, ArticleView};
    use crate::model::article::Article;
    use crate::model::category::CategorySelection;
    use crate::search::filter::FilterState;
    use crate::store::article_store::ArticleStore;

    fn store() -> ArticleStore {
        ArticleStore::seed(vec![
            Article::new(1, "Rust basics", "ownership", "Tech", "5 мин", "d1"),
            Article::new(2, "Color theory", "palettes", "Design", "8 мин", "d2").bookmarked(true),
            Article::new(3, "Async Rust", "futures", "Tech", "9 мин", "d3"),
        ])
        .expect("seed")
    }

    #[test]
    fn empty_store_yields_empty_views() {
        let empty = ArticleStore::default();
        assert!(visible_articles(&empty, &FilterState::default()).is_empty());
        assert!(bookmarked_articles(&empty).is_empty());
    }

    #[test]
    fn visible_articles_is_a_stable_filter() {
        let store = store();
        let view = visible_articles(&store, &FilterState::new("rust", CategorySelection::All));
        assert_eq!(view.ids(), vec![1, 3]);
    }

    #[test]
    fn positions_and_direct_view_agree() {
        let store = store();
        let filter = FilterState::new("", CategorySelection::Category("Tech".into()));
        let positions = visible_positions(&store, &filter);
        assert_eq!(
            ArticleView::from_positions(&store, &positions),
            visible_articles(&store, &filter)
        );
    }

    #[test]
    fn bookmarks_ignore_filter() {
        let store = store();
        let hidden = FilterState::new("rust", CategorySelection::Category("Tech".into()));
        assert!(!visible_articles(&store, &hidden).contains(2));
        assert_eq!(bookmarked_articles(&store).ids(), vec![2]);
    }
}
