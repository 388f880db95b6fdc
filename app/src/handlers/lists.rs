//! List endpoints.
//!
//! - `POST /api/lists` - Create a list, answering with its sidebar entry
//! - `DELETE /api/lists/:id` - Delete a list and its todos, then send the
//!   browser back to `/app`

use crate::error::reject;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    Form,
};
use listmark_todo::{ListId, TodoAction};
use listmark_web::{AppError, FragmentResponse, WebResult};
use serde::Deserialize;
use uuid::Uuid;

/// Form for creating a list.
#[derive(Debug, Deserialize)]
pub struct CreateListForm {
    /// Display name
    pub name: String,
    /// Optional description; blank means none
    #[serde(default)]
    pub description: Option<String>,
    /// Optional `#rgb`/`#rrggbb` color; blank picks the default
    #[serde(default)]
    pub color: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Create a list.
///
/// # Errors
///
/// 422 for an empty or overlong name, an overlong description or a bad color.
pub async fn create_list(
    State(state): State<AppState>,
    Form(form): Form<CreateListForm>,
) -> WebResult<FragmentResponse> {
    let id = ListId::new();
    let action = TodoAction::CreateList {
        id,
        name: form.name,
        description: non_blank(form.description),
        color: non_blank(form.color),
    };

    let item = state
        .store
        .send_and_read(action, |todos, _event| {
            todos
                .list(&id)
                .map(|list| views::sidebar_item(list, todos.incomplete_count(&id), false))
        })
        .await
        .map_err(reject)?
        .ok_or_else(|| AppError::internal("Created list is missing from state"))?;

    tracing::info!(list_id = %id, "List created");
    Ok(FragmentResponse::new(item))
}

/// Delete a list together with its todos.
///
/// # Errors
///
/// 404 for an unknown list.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<FragmentResponse> {
    let id = ListId::from_uuid(id);
    state
        .store
        .send(TodoAction::DeleteList { id })
        .await
        .map_err(reject)?;

    tracing::info!(list_id = %id, "List deleted");
    Ok(FragmentResponse::empty().with_redirect("/app"))
}
