//! Commands and events for lists and todos.

use crate::types::{DueDate, ListId, TodoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actions representing commands and events for lists and todos
///
/// Commands express intent and are validated by the reducer. Each accepted
/// command yields exactly one event, which is what gets applied to state.
/// Events carry the owning `list_id` so callers can re-derive list counts even
/// after the todo itself is gone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoAction {
    // ========== Commands ==========
    /// Command: Create a new list
    CreateList {
        /// List identifier
        id: ListId,
        /// Display name
        name: String,
        /// Optional description
        description: Option<String>,
        /// Optional CSS hex color
        color: Option<String>,
    },

    /// Command: Delete a list and every todo in it
    DeleteList {
        /// List to delete
        id: ListId,
    },

    /// Command: Append a todo to a list
    CreateTodo {
        /// Todo identifier
        id: TodoId,
        /// Owning list
        list_id: ListId,
        /// Title of the todo
        title: String,
        /// Optional due date
        due_date: Option<DueDate>,
    },

    /// Command: Change the title and due date of a todo
    UpdateTodo {
        /// Todo to update
        id: TodoId,
        /// New title
        title: String,
        /// New due date (`None` clears it)
        due_date: Option<DueDate>,
    },

    /// Command: Flip the completion flag of a todo
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Command: Delete a todo
    DeleteTodo {
        /// Todo to delete
        id: TodoId,
    },

    // ========== Events ==========
    /// Event: List was created
    ListCreated {
        /// List identifier
        id: ListId,
        /// Display name
        name: String,
        /// Description
        description: Option<String>,
        /// CSS hex color
        color: String,
        /// When the list was created
        created_at: DateTime<Utc>,
    },

    /// Event: List and its todos were deleted
    ListDeleted {
        /// List identifier
        id: ListId,
    },

    /// Event: Todo was created
    TodoCreated {
        /// Todo identifier
        id: TodoId,
        /// Owning list
        list_id: ListId,
        /// Title of the todo
        title: String,
        /// Ordering hint within the list
        position: i64,
        /// Optional due date
        due_date: Option<DueDate>,
        /// When the todo was created
        created_at: DateTime<Utc>,
    },

    /// Event: Todo title or due date changed
    TodoUpdated {
        /// Todo identifier
        id: TodoId,
        /// Owning list
        list_id: ListId,
        /// New title
        title: String,
        /// New due date
        due_date: Option<DueDate>,
        /// When the change happened
        updated_at: DateTime<Utc>,
    },

    /// Event: Todo completion flag changed
    TodoToggled {
        /// Todo identifier
        id: TodoId,
        /// Owning list
        list_id: ListId,
        /// Completion flag after the toggle
        is_completed: bool,
        /// When the toggle happened
        toggled_at: DateTime<Utc>,
    },

    /// Event: Todo was deleted
    TodoDeleted {
        /// Todo identifier
        id: TodoId,
        /// List the todo belonged to
        list_id: ListId,
    },
}

impl TodoAction {
    /// Whether this action is a command
    #[must_use]
    pub const fn is_command(&self) -> bool {
        matches!(
            self,
            Self::CreateList { .. }
                | Self::DeleteList { .. }
                | Self::CreateTodo { .. }
                | Self::UpdateTodo { .. }
                | Self::ToggleTodo { .. }
                | Self::DeleteTodo { .. }
        )
    }

    /// Whether this action is an event
    #[must_use]
    pub const fn is_event(&self) -> bool {
        !self.is_command()
    }

    /// The list this action targets, when it is known without consulting state
    #[must_use]
    pub const fn affected_list(&self) -> Option<ListId> {
        match self {
            Self::CreateList { id, .. }
            | Self::DeleteList { id }
            | Self::ListCreated { id, .. }
            | Self::ListDeleted { id } => Some(*id),
            Self::CreateTodo { list_id, .. }
            | Self::TodoCreated { list_id, .. }
            | Self::TodoUpdated { list_id, .. }
            | Self::TodoToggled { list_id, .. }
            | Self::TodoDeleted { list_id, .. } => Some(*list_id),
            Self::UpdateTodo { .. } | Self::ToggleTodo { .. } | Self::DeleteTodo { .. } => None,
        }
    }
}
