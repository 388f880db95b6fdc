//! Why a todo or list command was rejected.

use crate::types::{ListId, TodoId};
use thiserror::Error;

/// Longest accepted list name, in characters
pub const MAX_LIST_NAME_LEN: usize = 100;

/// Longest accepted list description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Longest accepted todo title, in characters
pub const MAX_TITLE_LEN: usize = 500;

/// Errors produced while validating list and todo commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No list with this id exists
    #[error("List with ID {0} not found")]
    ListNotFound(ListId),

    /// No todo with this id exists
    #[error("Todo with ID {0} not found")]
    TodoNotFound(TodoId),

    /// A list with this id already exists
    #[error("List with ID {0} already exists")]
    DuplicateList(ListId),

    /// A todo with this id already exists
    #[error("Todo with ID {0} already exists")]
    DuplicateTodo(TodoId),

    /// Todo title is empty after trimming
    #[error("Todo title cannot be empty")]
    EmptyTitle,

    /// Todo title exceeds [`MAX_TITLE_LEN`]
    #[error("Todo title too long (max {} characters)", MAX_TITLE_LEN)]
    TitleTooLong,

    /// List name is empty after trimming
    #[error("List name cannot be empty")]
    EmptyListName,

    /// List name exceeds [`MAX_LIST_NAME_LEN`]
    #[error("List name too long (max {} characters)", MAX_LIST_NAME_LEN)]
    ListNameTooLong,

    /// Description exceeds [`MAX_DESCRIPTION_LEN`]
    #[error("List description too long (max {} characters)", MAX_DESCRIPTION_LEN)]
    DescriptionTooLong,

    /// Color is not `#rgb` or `#rrggbb`
    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// Due date is not `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS[.fff]]`
    #[error("Invalid due date '{0}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS[.fff]]")]
    InvalidDueDate(String),
}

impl TodoError {
    /// Whether the error names a missing list or todo
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::TodoNotFound(_))
    }

    /// Whether the error is an id collision
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateList(_) | Self::DuplicateTodo(_))
    }
}
