//! View Model
//!
//! Filter and sort helpers applied before rendering the grid.

use std::cmp::Ordering;

use crate::models::Movie;

/// Sort mode selected in the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest release date first
    #[default]
    DateDesc,
    /// Highest vote average first
    RatingDesc,
    /// Alphabetical by title
    TitleAsc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::DateDesc => "date_desc",
            SortMode::RatingDesc => "rating_desc",
            SortMode::TitleAsc => "title_asc",
        }
    }

    /// Unknown values fall back to `DateDesc`
    pub fn from_str(s: &str) -> Self {
        match s {
            "rating_desc" => SortMode::RatingDesc,
            "title_asc" => SortMode::TitleAsc,
            _ => SortMode::DateDesc,
        }
    }
}

/// Filter by title substring, then sort by `mode`.
/// Returns a new list; `items` is left as is.
pub fn apply_filters(items: &[Movie], query: &str, mode: SortMode) -> Vec<Movie> {
    let query = query.to_lowercase();
    let query = query.trim();

    let mut result: Vec<Movie> = items
        .iter()
        .filter(|movie| query.is_empty() || movie.title_or_empty().to_lowercase().contains(query))
        .cloned()
        .collect();

    // sort_by is stable, so equal keys keep feed order
    match mode {
        SortMode::RatingDesc => result.sort_by(|a, b| {
            b.rating_or_zero()
                .partial_cmp(&a.rating_or_zero())
                .unwrap_or(Ordering::Equal)
        }),
        SortMode::TitleAsc => result.sort_by(|a, b| locale_cmp(a.title_or_empty(), b.title_or_empty())),
        // Plain string comparison: "" (missing) sorts after every date
        SortMode::DateDesc => {
            result.sort_by(|a, b| b.release_date_or_empty().cmp(a.release_date_or_empty()))
        }
    }

    result
}

/// Locale-aware title comparison (`String.prototype.localeCompare`)
#[cfg(target_arch = "wasm32")]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let order = js_sys::JsString::from(a).locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new());
    order.cmp(&0)
}

/// Host fallback: case-folded order, ties broken by the raw strings
#[cfg(not(target_arch = "wasm32"))]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
