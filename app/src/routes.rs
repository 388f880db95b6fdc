//! Router configuration.

use crate::handlers::{lists, pages, todos};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use listmark_web::handlers::health_check;
use listmark_web::{correlation_id_layer, trace_layer};

/// Build the complete Axum router.
///
/// Pages live under `/app`, htmx mutation endpoints under `/api`. Every
/// request is traced and tagged with a correlation ID.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/lists", post(lists::create_list))
        .route("/lists/:id", delete(lists::delete_list))
        .route("/todos", post(todos::create_todo))
        .route("/todos/:id", put(todos::update_todo).delete(todos::delete_todo))
        .route("/todos/:id/toggle", patch(todos::toggle_todo));

    Router::new()
        .route("/", get(pages::root))
        .route("/app", get(pages::index))
        .route("/app/lists/:id", get(pages::list_page))
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(trace_layer())
        .layer(correlation_id_layer())
}
