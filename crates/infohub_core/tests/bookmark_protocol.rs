use infohub_core::{CatalogChange, CatalogSession};
use std::sync::{Arc, Mutex};

fn open_session() -> CatalogSession {
    CatalogSession::with_default_seed().unwrap()
}

#[test]
fn toggle_adds_then_removes_from_bookmarks() {
    let mut session = open_session();
    assert!(!session.store().get(1).unwrap().is_bookmarked);

    assert_eq!(session.toggle_bookmark(1), Some(true));
    assert_eq!(session.bookmarked_articles().ids(), vec![1, 2, 5]);

    assert_eq!(session.toggle_bookmark(1), Some(false));
    assert_eq!(session.bookmarked_articles().ids(), vec![2, 5]);
}

#[test]
fn toggle_changes_only_the_target_article() {
    let mut session = open_session();
    let before = session.store().articles().to_vec();

    session.toggle_bookmark(4);
    let after = session.store().articles();
    for (old, new) in before.iter().zip(after) {
        if old.id == 4 {
            assert_eq!(new.is_bookmarked, !old.is_bookmarked);
            assert_eq!(new.title, old.title);
            assert_eq!(new.category, old.category);
        } else {
            assert_eq!(new, old);
        }
    }
}

#[test]
fn double_toggle_restores_store() {
    let mut session = open_session();
    let original = session.store().clone();

    session.toggle_bookmark(2);
    session.toggle_bookmark(2);
    assert_eq!(session.store(), &original);
    assert_eq!(session.store().revision(), 2);
}

#[test]
fn unknown_id_is_noop() {
    let mut session = open_session();
    let original = session.store().clone();

    assert_eq!(session.toggle_bookmark(999), None);
    assert_eq!(session.store(), &original);
    assert_eq!(session.store().revision(), 0);
}

#[test]
fn bookmarks_stay_visible_when_filtered_out() {
    let mut session = open_session();
    session.select_category("Здоровье").unwrap();
    session.toggle_bookmark(1);

    assert_eq!(session.visible_articles().ids(), vec![6]);
    assert_eq!(session.bookmarked_articles().ids(), vec![1, 2, 5]);
}

#[test]
fn value_form_toggle_does_not_mutate_source() {
    let session = open_session();
    let next = session.store().with_bookmark_toggled(3);
    assert!(!session.store().get(3).unwrap().is_bookmarked);
    assert!(next.get(3).unwrap().is_bookmarked);
    assert_eq!(next.with_bookmark_toggled(3), *session.store());
}

#[test]
fn observers_receive_changes_with_fresh_snapshots() {
    let mut session = open_session();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = session.subscribe_fn(move |change, snapshot| {
        sink.lock()
            .unwrap()
            .push((change.clone(), snapshot.visible_count, snapshot.bookmarked_count));
    });

    session.set_search_query("основы");
    session.select_category("Финансы").unwrap();
    session.toggle_bookmark(5);
    session.toggle_bookmark(404);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            (CatalogChange::SearchQueryChanged, 2, 2),
            (
                CatalogChange::CategoryChanged {
                    label: "Финансы".to_string()
                },
                1,
                2
            ),
            (
                CatalogChange::BookmarkToggled {
                    id: 5,
                    is_bookmarked: Some(false)
                },
                1,
                1
            ),
            (
                CatalogChange::BookmarkToggled {
                    id: 404,
                    is_bookmarked: None
                },
                1,
                1
            ),
        ]
    );

    assert!(session.unsubscribe(subscription));
    assert!(!session.unsubscribe(subscription));
    session.set_search_query("");
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[test]
fn rejected_category_does_not_notify() {
    let mut session = open_session();
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);
    session.subscribe_fn(move |_, _| *counter.lock().unwrap() += 1);

    assert!(session.select_category("Кулинария").is_err());
    assert_eq!(*calls.lock().unwrap(), 0);
    assert_eq!(session.observer_count(), 1);
}
