//! Listmark: a multi-list todo web application.
//!
//! Server-rendered HTML with htmx. Each todo mutation answers with the changed
//! row plus out-of-band fragments that keep the browser tab title
//! (`"(3) Work - App"`) and the sidebar badge in step with the server, with
//! no page reload. Counts are derived from the current todos on every render.
//!
//! # Modules
//!
//! - [`config`]: environment configuration
//! - [`state`]: shared handler state (store, calendar, app name)
//! - [`views`]: HTML rendering
//! - [`handlers`]: page, list and todo endpoints
//! - [`routes`]: the router

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod views;

pub use config::Config;
pub use routes::build_router;
pub use state::AppState;
