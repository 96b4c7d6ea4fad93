//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog intents and derived views to Dart via FRB.
//! - Own the single process-level catalog session behind the FFI boundary.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every catalog call returns a snapshot derived after the call applied.

use infohub_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Article, CatalogSession, CatalogSnapshot, SessionConfig, SessionResult,
};
use log::{error, warn};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<Option<CatalogSession>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Article row rendered by catalog and bookmark lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub read_time: String,
    pub date: String,
    /// Drives the bookmark icon state.
    pub is_bookmarked: bool,
}

/// Everything the catalog screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshotDto {
    pub search_query: String,
    pub selected_category: String,
    pub heading: String,
    /// Chooser labels, wildcard first.
    pub categories: Vec<String>,
    pub visible: Vec<ArticleItem>,
    pub visible_count: u32,
    pub bookmarked: Vec<ArticleItem>,
    pub bookmarked_count: u32,
    /// Lets the UI tell "empty catalog" apart from "no matches".
    pub store_size: u32,
}

/// Envelope for catalog calls that may be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogActionResponse {
    /// Whether the intent was applied.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Current state, also on rejection. `None` only when no session exists.
    pub snapshot: Option<CatalogSnapshotDto>,
}

impl CatalogActionResponse {
    fn success(message: impl Into<String>, snapshot: CatalogSnapshotDto) -> Self {
        Self {
            ok: true,
            message: message.into(),
            snapshot: Some(snapshot),
        }
    }

    fn failure(message: impl Into<String>, snapshot: Option<CatalogSnapshotDto>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            snapshot,
        }
    }
}

/// Returns the current catalog state.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Opens the built-in session on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_snapshot() -> CatalogActionResponse {
    match with_session(|session| Ok(to_snapshot_dto(&session.snapshot()))) {
        Ok(snapshot) => CatalogActionResponse::success("Catalog ready.", snapshot),
        Err(err) => CatalogActionResponse::failure(format!("catalog_snapshot failed: {err}"), None),
    }
}

/// Applies a search-text change.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Text is used as typed (no trimming); always succeeds once a session exists.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_set_search_query(text: String) -> CatalogActionResponse {
    match with_session(|session| {
        session.set_search_query(text);
        Ok(to_snapshot_dto(&session.snapshot()))
    }) {
        Ok(snapshot) => CatalogActionResponse::success("Search updated.", snapshot),
        Err(err) => CatalogActionResponse::failure(
            format!("catalog_set_search_query failed: {err}"),
            None,
        ),
    }
}

/// Selects a category chooser label.
///
/// # FFI contract
/// - Unknown labels are rejected and the previous selection is kept.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_select_category(label: String) -> CatalogActionResponse {
    let result = with_session(|session| {
        let applied = session.select_category(&label).map(|_| ());
        Ok((applied, to_snapshot_dto(&session.snapshot())))
    });

    match result {
        Ok((Ok(()), snapshot)) => CatalogActionResponse::success("Category selected.", snapshot),
        Ok((Err(err), snapshot)) => CatalogActionResponse::failure(
            format!("catalog_select_category failed: {err}"),
            Some(snapshot),
        ),
        Err(err) => CatalogActionResponse::failure(
            format!("catalog_select_category failed: {err}"),
            None,
        ),
    }
}

/// Toggles one article bookmark.
///
/// # FFI contract
/// - Unknown ids leave the catalog unchanged and report `ok = false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_toggle_bookmark(id: i64) -> CatalogActionResponse {
    let result = with_session(|session| {
        let is_bookmarked = session.toggle_bookmark(id);
        Ok((is_bookmarked, to_snapshot_dto(&session.snapshot())))
    });

    match result {
        Ok((Some(true), snapshot)) => CatalogActionResponse::success("Bookmark added.", snapshot),
        Ok((Some(false), snapshot)) => {
            CatalogActionResponse::success("Bookmark removed.", snapshot)
        }
        Ok((None, snapshot)) => {
            CatalogActionResponse::failure(format!("article not found: {id}"), Some(snapshot))
        }
        Err(err) => CatalogActionResponse::failure(
            format!("catalog_toggle_bookmark failed: {err}"),
            None,
        ),
    }
}

/// Replaces the session with one seeded from a JSON article array.
///
/// Categories are derived from the payload, wildcard first.
///
/// # FFI contract
/// - On failure the previous session stays active.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_load_seed(seed_json: String) -> CatalogActionResponse {
    match CatalogSession::from_seed_json(seed_json.as_str(), SessionConfig::default()) {
        Ok(session) => {
            let snapshot = to_snapshot_dto(&session.snapshot());
            *lock_session() = Some(session);
            CatalogActionResponse::success("Catalog seeded.", snapshot)
        }
        Err(err) => {
            warn!("event=seed_load module=ffi status=error");
            CatalogActionResponse::failure(format!("catalog_load_seed failed: {err}"), None)
        }
    }
}

fn lock_session() -> MutexGuard<'static, Option<CatalogSession>> {
    SESSION
        .get_or_init(|| Mutex::new(None))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_session<T>(f: impl FnOnce(&mut CatalogSession) -> SessionResult<T>) -> Result<T, String> {
    let mut guard = lock_session();
    if guard.is_none() {
        let session = CatalogSession::with_default_seed().map_err(|err| {
            error!("event=session_open module=ffi status=error");
            format!("catalog session open failed: {err}")
        })?;
        *guard = Some(session);
    }

    match guard.as_mut() {
        Some(session) => f(session).map_err(|err| err.to_string()),
        None => Err("catalog session unavailable".to_string()),
    }
}

fn to_snapshot_dto(snapshot: &CatalogSnapshot) -> CatalogSnapshotDto {
    CatalogSnapshotDto {
        search_query: snapshot.search_query.clone(),
        selected_category: snapshot.selected_category.clone(),
        heading: snapshot.heading.clone(),
        categories: snapshot.categories.clone(),
        visible: snapshot.visible.iter().map(to_article_item).collect(),
        visible_count: count_u32(snapshot.visible_count),
        bookmarked: snapshot.bookmarked.iter().map(to_article_item).collect(),
        bookmarked_count: count_u32(snapshot.bookmarked_count),
        store_size: count_u32(snapshot.store_size),
    }
}

fn to_article_item(article: &Article) -> ArticleItem {
    ArticleItem {
        id: article.id,
        title: article.title.clone(),
        description: article.description.clone(),
        category: article.category.clone(),
        read_time: article.read_time.clone(),
        date: article.date.clone(),
        is_bookmarked: article.is_bookmarked,
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_load_seed, catalog_select_category, catalog_set_search_query, catalog_snapshot,
        catalog_toggle_bookmark, core_version, init_logging, lock_session, ping,
    };
    use std::sync::{Mutex, MutexGuard};

    static TEST_LOCK: Mutex<()> = Mutex::new(());

    /// Serializes tests over the shared session and resets it to built-in data.
    fn fresh_session() -> MutexGuard<'static, ()> {
        let guard = TEST_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *lock_session() = None;
        guard
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn snapshot_opens_built_in_catalog() {
        let _guard = fresh_session();
        let response = catalog_snapshot();
        assert!(response.ok, "{}", response.message);
        let snapshot = response.snapshot.expect("snapshot");
        assert_eq!(snapshot.visible_count, 6);
        assert_eq!(snapshot.bookmarked_count, 2);
        assert_eq!(snapshot.categories[0], "Все");
        assert_eq!(snapshot.heading, "Все статьи");
    }

    #[test]
    fn search_and_category_narrow_visible_list() {
        let _guard = fresh_session();
        let searched = catalog_set_search_query("основы".to_string());
        assert_eq!(searched.snapshot.expect("snapshot").visible_count, 2);

        let selected = catalog_select_category("Финансы".to_string());
        assert!(selected.ok, "{}", selected.message);
        let snapshot = selected.snapshot.expect("snapshot");
        assert_eq!(snapshot.visible_count, 1);
        assert_eq!(snapshot.visible[0].id, 5);
        assert_eq!(snapshot.heading, "Финансы");
    }

    #[test]
    fn unknown_category_is_rejected_with_current_snapshot() {
        let _guard = fresh_session();
        let response = catalog_select_category("Кулинария".to_string());
        assert!(!response.ok);
        assert!(response.message.contains("unknown category"));
        assert_eq!(
            response.snapshot.expect("snapshot").selected_category,
            "Все"
        );
    }

    #[test]
    fn toggle_bookmark_round_trip() {
        let _guard = fresh_session();
        let added = catalog_toggle_bookmark(1);
        assert!(added.ok);
        assert_eq!(added.message, "Bookmark added.");
        assert_eq!(added.snapshot.expect("snapshot").bookmarked_count, 3);

        let removed = catalog_toggle_bookmark(1);
        assert_eq!(removed.message, "Bookmark removed.");
        assert_eq!(removed.snapshot.expect("snapshot").bookmarked_count, 2);

        let missing = catalog_toggle_bookmark(404);
        assert!(!missing.ok);
        assert_eq!(missing.snapshot.expect("snapshot").bookmarked_count, 2);
    }

    #[test]
    fn load_seed_replaces_session_and_keeps_old_one_on_error() {
        let _guard = fresh_session();
        let bad = catalog_load_seed("not json".to_string());
        assert!(!bad.ok);
        assert_eq!(
            catalog_snapshot().snapshot.expect("snapshot").store_size,
            6
        );

        let seeded = catalog_load_seed(
            r#"[{"id": 1, "title": "Rust", "description": "d", "category": "Технологии",
                 "readTime": "1 мин", "date": "today"}]"#
                .to_string(),
        );
        assert!(seeded.ok, "{}", seeded.message);
        let snapshot = seeded.snapshot.expect("snapshot");
        assert_eq!(snapshot.store_size, 1);
        assert_eq!(snapshot.categories, vec!["Все", "Технологии"]);
    }
}
