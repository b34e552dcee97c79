//! UI Components
//!
//! Leptos components for the movie grid page.

mod movie_card;
mod movie_grid;
mod status_bar;
mod toolbar;

pub use movie_card::{CardView, MovieCard};
pub use movie_grid::MovieGrid;
pub use status_bar::StatusBar;
pub use toolbar::Toolbar;
