//! Lists and todos for Listmark.
//!
//! - Domain model: [`TodoList`] owns [`Todo`]s, each with an optional [`DueDate`]
//! - [`TodoReducer`] validates commands (create/delete list, create/update/
//!   toggle/delete todo) and applies the resulting events to [`TodoState`]
//! - [`TodoState::incomplete_count`] derives a list's open-todo count from the
//!   current todos; there is no stored counter to keep in sync
//! - [`dates`] holds the total helpers views use for due-date badges
//!
//! # Quick Start
//!
//! ```no_run
//! use listmark_core::environment::SystemClock;
//! use listmark_runtime::Store;
//! use listmark_todo::{ListId, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TodoEnvironment::new(Arc::new(SystemClock));
//! let store = Store::new(TodoState::new(), TodoReducer::new(), env);
//!
//! let list_id = ListId::new();
//! store.send(TodoAction::CreateList {
//!     id: list_id,
//!     name: "Groceries".to_string(),
//!     description: None,
//!     color: None,
//! }).await?;
//!
//! let id = TodoId::new();
//! let open = store
//!     .send_and_read(
//!         TodoAction::CreateTodo { id, list_id, title: "Buy milk".to_string(), due_date: None },
//!         |state, _event| state.incomplete_count(&list_id),
//!     )
//!     .await?;
//! assert_eq!(open, 1);
//! # Ok(())
//! # }
//! ```

pub mod action;
pub mod dates;
pub mod error;
pub mod reducer;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use action::TodoAction;
pub use error::TodoError;
pub use reducer::{TodoEnvironment, TodoReducer};
pub use state::TodoState;
pub use types::{DueDate, ListId, Todo, TodoId, TodoList};
