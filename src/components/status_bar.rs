//! Status Bar Component
//!
//! Freshness line and the "no data yet" banner.

use leptos::prelude::*;

use crate::config::LABEL_NOTICE;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <p id="last" class="text-sm text-neutral-500">
            {move || store.status().get().text()}
        </p>
        <div
            id="notice"
            class="rounded-xl bg-amber-50 border border-amber-200 px-4 py-2 text-sm"
            class:hidden=move || !store.notice_visible().get()
        >
            {LABEL_NOTICE}
        </div>
    }
}
