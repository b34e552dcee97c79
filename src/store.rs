//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::LoadError;
use crate::loader::StatusLine;
use crate::models::{Feed, Movie};

/// Last successfully loaded feed plus the status widgets derived from loads
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items of the last loaded feed, in feed order
    pub items: Vec<Movie>,
    /// "No data yet" banner
    pub notice_visible: bool,
    /// Freshness / error line
    pub status: StatusLine,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the stored items with a freshly loaded feed
pub fn store_apply_feed(store: &AppStore, feed: Feed) {
    *store.notice_visible().write() = feed.is_empty();
    *store.status().write() = StatusLine::from_feed(&feed);
    *store.items().write() = feed.items;
}

/// Record a failed load; items and notice keep their previous state
pub fn store_apply_failure(store: &AppStore) {
    *store.status().write() = StatusLine::Failed;
}

/// Apply the outcome of one load
pub fn store_apply_load(store: &AppStore, result: Result<Feed, LoadError>) {
    match result {
        Ok(feed) => store_apply_feed(store, feed),
        Err(_) => store_apply_failure(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;

    fn make_movie(id: i64, title: &str) -> Movie {
        Movie {
            id: MovieId::Number(id.into()),
            title: Some(title.to_string()),
            release_date: None,
            vote_average: None,
            poster_url: None,
            genres: Vec::new(),
            overview: None,
        }
    }

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn test_initial_state() {
        with_owner(|| {
            let store = Store::new(AppState::default());
            assert!(store.items().get_untracked().is_empty());
            assert!(!store.notice_visible().get_untracked());
            assert_eq!(store.status().get_untracked(), StatusLine::Loading);
        });
    }

    #[test]
    fn test_empty_feed_shows_notice_and_waiting() {
        with_owner(|| {
            let store = Store::new(AppState::default());
            let feed = Feed::from_json(r#"{"count": 0, "items": []}"#).unwrap();

            store_apply_load(&store, Ok(feed));

            assert!(store.notice_visible().get_untracked());
            assert_eq!(store.status().get_untracked(), StatusLine::Waiting);
            assert!(store.items().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_feed_replaces_items_wholesale() {
        with_owner(|| {
            let store = Store::new(AppState {
                items: vec![make_movie(1, "Old")],
                notice_visible: true,
                status: StatusLine::Loading,
            });
            let feed = Feed {
                items: vec![make_movie(2, "Dune"), make_movie(3, "Arrival")],
                count: Some(2),
                fetched_at_utc: None,
            };

            store_apply_load(&store, Ok(feed));

            let items = store.items().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].title_or_empty(), "Dune");
            assert!(!store.notice_visible().get_untracked());
        });
    }

    #[test]
    fn test_failed_load_only_touches_status() {
        with_owner(|| {
            let store = Store::new(AppState {
                items: vec![make_movie(1, "Dune")],
                notice_visible: true,
                status: StatusLine::Loading,
            });
            let err = Feed::from_json("not json").unwrap_err();

            store_apply_load(&store, Err(LoadError::from(err)));

            assert_eq!(store.status().get_untracked(), StatusLine::Failed);
            assert_eq!(store.items().get_untracked(), vec![make_movie(1, "Dune")]);
            assert!(store.notice_visible().get_untracked());
        });
    }

    #[test]
    fn test_failure_before_first_load() {
        with_owner(|| {
            let store = Store::new(AppState::default());
            store_apply_load(&store, Err(LoadError::Status(404)));

            assert_eq!(store.status().get_untracked(), StatusLine::Failed);
            assert!(store.items().get_untracked().is_empty());
            assert!(!store.notice_visible().get_untracked());
        });
    }
}
