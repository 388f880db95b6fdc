//! Mapping of domain rejections to HTTP errors.

use listmark_todo::TodoError;
use listmark_web::AppError;

/// Convert a rejected todo or list command into an [`AppError`].
///
/// Missing ids answer 404, id collisions 409, and every validation failure
/// 422. The message is the error's `Display` text.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // Passed to `map_err`
pub fn reject(error: TodoError) -> AppError {
    match &error {
        TodoError::ListNotFound(id) => AppError::not_found("List", id),
        TodoError::TodoNotFound(id) => AppError::not_found("Todo", id),
        e if e.is_conflict() => AppError::conflict(e.to_string()),
        e => AppError::validation(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use listmark_todo::{ListId, TodoId};

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(reject(TodoError::TodoNotFound(TodoId::new())).status(), StatusCode::NOT_FOUND);
        assert_eq!(reject(TodoError::ListNotFound(ListId::new())).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicates_map_to_409() {
        assert_eq!(reject(TodoError::DuplicateTodo(TodoId::new())).status(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_maps_to_422_with_message() {
        let err = reject(TodoError::EmptyTitle);
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "Todo title cannot be empty");
    }
}
