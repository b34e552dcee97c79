//! Movie Card Component
//!
//! One grid cell: poster, rating badge, title, release date and genres.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::{AppConfig, LABEL_NO_POSTER, PLACEHOLDER_DASH};
use crate::models::{Movie, MovieId};

/// Unreserved characters stay readable in the `id` query value
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Link to the detail page for `id`
pub fn detail_href(detail_page: &str, id: &MovieId) -> String {
    let id = id.to_string();
    format!("{}?id={}", detail_page, utf8_percent_encode(&id, QUERY_ENCODE_SET))
}

/// Vote average with one decimal, or a dash
pub fn rating_label(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(rating) => format!("{:.1}", rating),
        None => PLACEHOLDER_DASH.to_string(),
    }
}

pub fn release_label(release_date: Option<&str>) -> String {
    match release_date {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => PLACEHOLDER_DASH.to_string(),
    }
}

/// First `max` genres joined by ", "
pub fn genres_label(genres: &[String], max: usize) -> String {
    genres
        .iter()
        .take(max)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Display-ready card content; strings are raw text, escaped by `view!`
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub href: String,
    pub title: String,
    pub poster: Option<String>,
    pub rating: String,
    pub release: String,
    pub genres: String,
}

impl CardView {
    pub fn new(movie: &Movie, config: &AppConfig) -> Self {
        Self {
            href: detail_href(&config.detail_page, &movie.id),
            title: movie.title_or_empty().to_string(),
            poster: movie.poster().map(str::to_string),
            rating: rating_label(movie.vote_average),
            release: release_label(movie.release_date.as_deref()),
            genres: genres_label(&movie.genres, config.max_genres),
        }
    }
}

#[component]
pub fn MovieCard(card: CardView) -> impl IntoView {
    let CardView { href, title, poster, rating, release, genres } = card;

    // Text and attributes go through view!, so feed content is escaped
    let poster_view = match poster {
        Some(src) => view! {
            <img
                src=src
                alt=title.clone()
                loading="lazy"
                class="w-full aspect-[2/3] object-cover"
            />
        }
        .into_any(),
        None => view! {
            <div class="w-full aspect-[2/3] bg-neutral-200 grid place-items-center text-neutral-500">
                {LABEL_NO_POSTER}
            </div>
        }
        .into_any(),
    };

    view! {
        <a href=href class="group block rounded-2xl overflow-hidden bg-white border hover:shadow transition">
            <div class="relative">
                {poster_view}
                <div class="absolute top-2 left-2 text-xs bg-black/70 text-white px-2 py-1 rounded-full">
                    "⭐ " {rating}
                </div>
            </div>
            <div class="p-3">
                <div class="font-medium leading-tight line-clamp-2 group-hover:underline">{title}</div>
                <div class="mt-1 text-sm text-neutral-600">{release}</div>
                <div class="mt-1 text-xs text-neutral-500 line-clamp-1">{genres}</div>
            </div>
        </a>
    }
}
