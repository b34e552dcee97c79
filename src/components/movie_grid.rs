//! Movie Grid Component
//!
//! Renders the filtered, sorted list as cards and toggles the empty indicator.

use leptos::prelude::*;

use crate::components::{CardView, MovieCard};
use crate::config::{AppConfig, LABEL_EMPTY};
use crate::context::use_app_context;
use crate::models::Movie;

/// Cards in display order plus the empty indicator state
#[derive(Debug, Clone, PartialEq)]
pub struct GridView {
    pub cards: Vec<CardView>,
    pub empty_visible: bool,
}

impl GridView {
    pub fn new(movies: &[Movie], config: &AppConfig) -> Self {
        Self {
            cards: movies.iter().map(|movie| CardView::new(movie, config)).collect(),
            empty_visible: movies.is_empty(),
        }
    }
}

#[component]
pub fn MovieGrid(#[prop(into)] movies: Signal<Vec<Movie>>) -> impl IntoView {
    let ctx = use_app_context();
    let grid = Memo::new(move |_| {
        movies.with(|list| ctx.config.with_value(|config| GridView::new(list, config)))
    });

    view! {
        <div id="grid" class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4">
            // Feed ids are not guaranteed unique, so the position is part of the key
            <For
                each=move || grid.get().cards.into_iter().enumerate()
                key=|(index, card)| (*index, card.href.clone())
                children=move |(_, card)| view! { <MovieCard card=card /> }
            />
        </div>
        <p
            id="empty"
            class="py-12 text-center text-neutral-500"
            class:hidden=move || !grid.with(|grid| grid.empty_visible)
        >
            {LABEL_EMPTY}
        </p>
    }
}
