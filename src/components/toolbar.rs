//! Toolbar Component
//!
//! Search box and sort selector. Every input or change event updates the
//! context signals, which re-derives the grid.

use leptos::prelude::*;

use crate::config::{LABEL_SEARCH, SORT_MODES};
use crate::context::use_app_context;

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="flex flex-col sm:flex-row gap-3">
            <input
                id="search"
                type="search"
                class="flex-1 rounded-xl border px-3 py-2"
                placeholder=LABEL_SEARCH
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.set_query(event_target_value(&ev))
                on:change=move |ev| ctx.set_query(event_target_value(&ev))
            />
            <select
                id="sort"
                class="rounded-xl border px-3 py-2"
                on:input=move |ev| ctx.set_sort(&event_target_value(&ev))
                on:change=move |ev| ctx.set_sort(&event_target_value(&ev))
            >
                {SORT_MODES.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <option value=value prop:selected=move || ctx.sort_mode.get().as_str() == value>
                            {*label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
