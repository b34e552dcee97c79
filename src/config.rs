//! App Configuration
//!
//! Feed location, link target and user-facing labels.

/// Runtime settings provided to components via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Relative path of the generated feed
    pub feed_url: String,
    /// Detail page receiving `?id=<movie id>`
    pub detail_page: String,
    /// Genres shown per card
    pub max_genres: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: "./data/movies.json".to_string(),
            detail_page: "movie.html".to_string(),
            max_genres: 2,
        }
    }
}

/// Sort selector options (value, label); the first one is the default
pub const SORT_MODES: &[(&str, &str)] = &[
    ("date_desc", "Сначала новые"),
    ("rating_desc", "По рейтингу"),
    ("title_asc", "По названию"),
];

pub const LABEL_LOADING: &str = "Загрузка…";
pub const LABEL_UPDATED: &str = "Обновлено:";
pub const LABEL_WAITING: &str = "Ожидание первой загрузки…";
pub const LABEL_FAILED: &str = "Ошибка загрузки данных";
pub const LABEL_NO_POSTER: &str = "Нет постера";
pub const LABEL_NOTICE: &str = "Данных пока нет: первая выгрузка ещё не выполнена.";
pub const LABEL_EMPTY: &str = "Ничего не найдено";
pub const LABEL_SEARCH: &str = "Поиск по названию…";
pub const PLACEHOLDER_DASH: &str = "—";
