//! Application Context
//!
//! Search and sort inputs shared via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::view_model::SortMode;

/// Toolbar signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Search text as typed - read
    pub query: ReadSignal<String>,
    /// Search text as typed - write
    set_query: WriteSignal<String>,
    /// Selected sort mode - read
    pub sort_mode: ReadSignal<SortMode>,
    /// Selected sort mode - write
    set_sort_mode: WriteSignal<SortMode>,
    /// Static settings
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        query: (ReadSignal<String>, WriteSignal<String>),
        sort_mode: (ReadSignal<SortMode>, WriteSignal<SortMode>),
        config: AppConfig,
    ) -> Self {
        Self {
            query: query.0,
            set_query: query.1,
            sort_mode: sort_mode.0,
            set_sort_mode: sort_mode.1,
            config: StoredValue::new(config),
        }
    }

    pub fn set_query(&self, query: String) {
        self.set_query.set(query);
    }

    /// Select a sort mode by its selector value
    pub fn set_sort(&self, value: &str) {
        self.set_sort_mode.set(SortMode::from_str(value));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
