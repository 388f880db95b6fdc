//! Full-page endpoints.

use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use listmark_todo::ListId;
use listmark_web::{AppError, FragmentResponse, HtmxRequest, WebResult};
use uuid::Uuid;

/// `GET /` sends the browser to the app.
#[allow(clippy::unused_async)]
pub async fn root() -> Redirect {
    Redirect::to("/app")
}

/// `GET /app`: sidebar and an empty panel.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let app_name = state.app_name.clone();
    Html(
        state
            .store
            .state(|todos| views::index_page(todos, &app_name))
            .await,
    )
}

/// `GET /app/lists/:id`: one list.
///
/// A plain request gets the full page, whose `<title>` carries the open-todo
/// count. An htmx request (navigation from the sidebar) gets the list panel
/// plus the title-count element and the sidebar list out-of-band, the latter
/// so the `selected` class follows the navigation.
///
/// # Errors
///
/// 404 when the list does not exist.
pub async fn list_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    htmx: HtmxRequest,
) -> WebResult<FragmentResponse> {
    let id = ListId::from_uuid(id);
    let today = state.calendar.today();
    let app_name = state.app_name.clone();

    state
        .store
        .state(|todos| {
            let list = todos.list(&id)?;
            Some(if htmx.is_htmx {
                let incomplete = todos.incomplete_count(&id);
                tracing::debug!(
                    list_id = %id,
                    target = ?htmx.target,
                    incomplete,
                    "List panel requested"
                );
                FragmentResponse::new(views::list_panel(todos, list, today))
                    .with_oob(views::title_count_oob(list, incomplete, &app_name))
                    .with_oob(views::sidebar_items_oob(todos, id))
            } else {
                FragmentResponse::new(views::list_page(todos, list, today, &app_name))
            })
        })
        .await
        .ok_or_else(|| AppError::not_found("List", id))
}
