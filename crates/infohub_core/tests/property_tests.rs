//! Property-based tests for filter and bookmark invariants.

use infohub_core::{
    bookmarked_articles, matches, visible_articles, Article, ArticleStore, CategorySelection,
    FilterState,
};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["Технологии", "Дизайн", "Финансы"];

fn article_strategy() -> impl Strategy<Value = (String, String, usize, bool)> {
    (
        "[a-zA-Zа-яА-Я ]{0,12}",
        "[a-zA-Zа-яА-Я ]{0,20}",
        0usize..CATEGORIES.len(),
        any::<bool>(),
    )
}

fn store_strategy() -> impl Strategy<Value = ArticleStore> {
    prop::collection::vec(article_strategy(), 0..12).prop_map(|rows| {
        let articles = rows
            .into_iter()
            .enumerate()
            .map(|(idx, (title, description, category, bookmarked))| {
                Article::new(
                    idx as i64 + 1,
                    title,
                    description,
                    CATEGORIES[category],
                    "5 мин",
                    "25 июля 2025",
                )
                .bookmarked(bookmarked)
            })
            .collect();
        ArticleStore::seed(articles).unwrap()
    })
}

fn selection_strategy() -> impl Strategy<Value = CategorySelection> {
    prop_oneof![
        Just(CategorySelection::All),
        (0usize..CATEGORIES.len())
            .prop_map(|idx| CategorySelection::Category(CATEGORIES[idx].to_string())),
    ]
}

proptest! {
    /// Wildcard plus empty search returns every article in store order.
    #[test]
    fn prop_unfiltered_view_is_whole_store(store in store_strategy()) {
        let view = visible_articles(&store, &FilterState::default());
        let expected = store.iter().map(|article| article.id).collect::<Vec<_>>();
        prop_assert_eq!(view.ids(), expected);
    }

    /// The view equals the stable filter of the store by the predicate.
    #[test]
    fn prop_view_is_stable_filter(
        store in store_strategy(),
        query in "[a-zа-я]{0,3}",
        category in selection_strategy(),
    ) {
        let filter = FilterState::new(query, category);
        let expected = store
            .iter()
            .filter(|article| matches(article, &filter))
            .map(|article| article.id)
            .collect::<Vec<_>>();
        prop_assert_eq!(visible_articles(&store, &filter).ids(), expected);
    }

    /// A case-changed substring of the title always matches under the wildcard.
    #[test]
    fn prop_title_substring_matches_case_insensitively(
        title in "[a-zA-Zа-яА-Я]{1,16}",
        start in 0usize..16,
        len in 0usize..16,
        category in selection_strategy(),
    ) {
        let chars = title.chars().collect::<Vec<_>>();
        let start = start % chars.len();
        let end = (start + len).min(chars.len());
        let needle = chars[start..end].iter().collect::<String>().to_uppercase();

        let article = Article::new(1, title.clone(), "", CATEGORIES[0], "1 мин", "d");
        let filter = FilterState::new(needle, category.clone());
        prop_assert_eq!(matches(&article, &filter), category.accepts(CATEGORIES[0]));
    }

    /// Toggle flips exactly one flag; toggling twice restores the store.
    #[test]
    fn prop_toggle_is_local_and_self_inverse(store in store_strategy(), id in 0i64..14) {
        let mut toggled = store.clone();
        let result = toggled.toggle_bookmark(id);

        match store.get(id) {
            Some(original) => {
                prop_assert_eq!(result, Some(!original.is_bookmarked));
            }
            None => {
                prop_assert_eq!(result, None);
            }
        }
        for (before, after) in store.iter().zip(toggled.iter()) {
            if before.id == id {
                prop_assert_eq!(after.is_bookmarked, !before.is_bookmarked);
                prop_assert_eq!(&after.title, &before.title);
                prop_assert_eq!(&after.description, &before.description);
            } else {
                prop_assert_eq!(after, before);
            }
        }

        toggled.toggle_bookmark(id);
        prop_assert_eq!(toggled, store);
    }

    /// Bookmark subview is exactly the flagged subset, whatever the filter.
    #[test]
    fn prop_bookmarks_independent_of_filter(store in store_strategy()) {
        let expected = store
            .iter()
            .filter(|article| article.is_bookmarked)
            .map(|article| article.id)
            .collect::<Vec<_>>();
        prop_assert_eq!(bookmarked_articles(&store).ids(), expected);
    }
}
