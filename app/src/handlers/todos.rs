//! Todo endpoints.
//!
//! - `POST /api/todos` - Append a todo to a list
//! - `PUT /api/todos/:id` - Change title and due date
//! - `PATCH /api/todos/:id/toggle` - Flip completion
//! - `DELETE /api/todos/:id` - Delete a todo
//!
//! Every response is the row fragment (empty for deletes) followed by two
//! out-of-band fragments: the page title count and the list's sidebar badge.
//! Both are rendered inside the store's write lock, from the state the
//! mutation just produced.

use crate::error::reject;
use crate::state::AppState;
use crate::views;
use axum::{
    extract::{Path, State},
    Form,
};
use chrono::NaiveDate;
use listmark_todo::{DueDate, ListId, TodoAction, TodoId, TodoState};
use listmark_web::{AppError, FragmentResponse, WebResult};
use serde::Deserialize;
use uuid::Uuid;

// ============================================================================
// Request Types
// ============================================================================

/// Form for creating a todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodoForm {
    /// Owning list
    pub list_id: Uuid,
    /// Title (trimmed by the reducer)
    pub title: String,
    /// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`, or empty
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Form for editing a todo.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoForm {
    /// New title
    pub title: String,
    /// New due date; empty or missing clears it
    #[serde(default)]
    pub due_date: Option<String>,
}

fn parse_due_date(raw: Option<&str>) -> WebResult<Option<DueDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(reject),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// What a todo mutation rendered, plus the fields worth logging
struct Rendered {
    list_id: ListId,
    incomplete: usize,
    response: FragmentResponse,
}

fn render_change(
    state: &TodoState,
    event: &TodoAction,
    today: NaiveDate,
    app_name: &str,
) -> Option<Rendered> {
    let list_id = event.affected_list()?;
    let list = state.list(&list_id)?;
    let incomplete = state.incomplete_count(&list_id);

    let primary = match event {
        TodoAction::TodoCreated { id, .. }
        | TodoAction::TodoUpdated { id, .. }
        | TodoAction::TodoToggled { id, .. } => views::todo_row(state.todo(id)?, today),
        TodoAction::TodoDeleted { .. } => String::new(),
        _ => return None,
    };

    let response = FragmentResponse::new(primary)
        .with_oob(views::title_count_oob(list, incomplete, app_name))
        .with_oob(views::list_badge_oob(list_id, incomplete));

    Some(Rendered {
        list_id,
        incomplete,
        response,
    })
}

async fn mutate(state: &AppState, action: TodoAction) -> WebResult<Rendered> {
    let today = state.calendar.today();
    let app_name = state.app_name.clone();

    state
        .store
        .send_and_read(action, move |todos, event| {
            render_change(todos, event, today, &app_name)
        })
        .await
        .map_err(reject)?
        .ok_or_else(|| AppError::internal("Todo change could not be rendered"))
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a todo at the end of its list.
///
/// # Errors
///
/// 404 for an unknown list, 422 for an empty or overlong title or a bad date.
pub async fn create_todo(
    State(state): State<AppState>,
    Form(form): Form<CreateTodoForm>,
) -> WebResult<FragmentResponse> {
    let due_date = parse_due_date(form.due_date.as_deref())?;
    let id = TodoId::new();

    let rendered = mutate(
        &state,
        TodoAction::CreateTodo {
            id,
            list_id: ListId::from_uuid(form.list_id),
            title: form.title,
            due_date,
        },
    )
    .await?;

    tracing::info!(
        todo_id = %id,
        list_id = %rendered.list_id,
        incomplete = rendered.incomplete,
        "Todo created"
    );
    Ok(rendered.response)
}

/// Change a todo's title and due date.
///
/// # Errors
///
/// 404 for an unknown todo, 422 for invalid input.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<UpdateTodoForm>,
) -> WebResult<FragmentResponse> {
    let due_date = parse_due_date(form.due_date.as_deref())?;
    let id = TodoId::from_uuid(id);

    let rendered = mutate(
        &state,
        TodoAction::UpdateTodo {
            id,
            title: form.title,
            due_date,
        },
    )
    .await?;

    tracing::debug!(todo_id = %id, list_id = %rendered.list_id, "Todo updated");
    Ok(rendered.response)
}

/// Flip a todo between open and completed.
///
/// # Errors
///
/// 404 for an unknown todo.
pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<FragmentResponse> {
    let id = TodoId::from_uuid(id);
    let rendered = mutate(&state, TodoAction::ToggleTodo { id }).await?;

    tracing::info!(
        todo_id = %id,
        list_id = %rendered.list_id,
        incomplete = rendered.incomplete,
        "Todo toggled"
    );
    Ok(rendered.response)
}

/// Delete a todo.
///
/// The primary fragment is empty so an `outerHTML` swap removes the row.
///
/// # Errors
///
/// 404 for an unknown todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> WebResult<FragmentResponse> {
    let id = TodoId::from_uuid(id);
    let rendered = mutate(&state, TodoAction::DeleteTodo { id }).await?;

    tracing::info!(
        todo_id = %id,
        list_id = %rendered.list_id,
        incomplete = rendered.incomplete,
        "Todo deleted"
    );
    Ok(rendered.response)
}
