//! Application state shared across all HTTP handlers.

use crate::config::Config;
use listmark_core::environment::{Calendar, Clock};
use listmark_runtime::Store;
use listmark_todo::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
use std::sync::Arc;

/// The store holding every list and todo
pub type TodoStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Lists and todos
    pub store: Arc<TodoStore>,
    /// Source of "today" for due-date badges
    pub calendar: Calendar,
    /// Suffix of page titles
    pub app_name: Arc<str>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<TodoStore>, calendar: Calendar, app_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            calendar,
            app_name: app_name.into(),
        }
    }

    /// Empty store, with `clock` driving both timestamps and "today".
    #[must_use]
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let store = Store::new(
            TodoState::new(),
            TodoReducer::new(),
            TodoEnvironment::new(Arc::clone(&clock)),
        );
        Self::new(
            Arc::new(store),
            Calendar::new(clock, config.app.today),
            config.app.name.as_str(),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("calendar", &self.calendar)
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}
