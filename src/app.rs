//! Now Playing App
//!
//! Page layout: header with status, toolbar, movie grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{MovieGrid, StatusBar, Toolbar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::loader::load_feed;
use crate::store::{AppState, AppStateStoreFields};
use crate::view_model::{apply_filters, SortMode};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(String::new()), signal(SortMode::default()), AppConfig::default());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load the feed once on mount
    Effect::new(move |_| {
        let url = ctx.config.with_value(|config| config.feed_url.clone());
        web_sys::console::log_1(&format!("[APP] Loading feed from {}", url).into());
        spawn_local(load_feed(store, url));
    });

    // Re-derived on every search/sort change and after the load lands
    let movies = Memo::new(move |_| {
        let query = ctx.query.get();
        let mode = ctx.sort_mode.get();
        store.items().with(|items| apply_filters(items, &query, mode))
    });

    view! {
        <main class="max-w-6xl mx-auto p-4 space-y-4">
            <header class="space-y-2">
                <h1 class="text-2xl font-semibold">"Сейчас в кино"</h1>
                <StatusBar />
            </header>

            <Toolbar />

            <MovieGrid movies=movies />
        </main>
    }
}
