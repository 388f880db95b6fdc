//! Reducer logic for lists and todos.
//!
//! Validate commands, produce events, and apply events to update state.

use crate::action::TodoAction;
use crate::error::{MAX_DESCRIPTION_LEN, MAX_LIST_NAME_LEN, MAX_TITLE_LEN, TodoError};
use crate::state::TodoState;
use crate::types::{DEFAULT_LIST_COLOR, ListId, Todo, TodoId, TodoList};
use listmark_core::{environment::Clock, reducer::Reducer};

/// Environment dependencies for the Todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Clock for generating timestamps
    pub clock: std::sync::Arc<dyn Clock>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(clock: std::sync::Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

/// Reducer for lists and todos
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn validate_title(title: &str) -> Result<String, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(TodoError::TitleTooLong);
        }
        Ok(title.to_string())
    }

    fn validate_color(color: Option<&str>) -> Result<String, TodoError> {
        let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) else {
            return Ok(DEFAULT_LIST_COLOR.to_string());
        };
        let valid = color
            .strip_prefix('#')
            .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
        if valid {
            Ok(color.to_ascii_lowercase())
        } else {
            Err(TodoError::InvalidColor(color.to_string()))
        }
    }

    /// Validates a `CreateList` command, returning the normalized
    /// name, description and color
    fn validate_create_list(
        state: &TodoState,
        id: &ListId,
        name: &str,
        description: Option<&str>,
        color: Option<&str>,
    ) -> Result<(String, Option<String>, String), TodoError> {
        if state.lists.contains_key(id) {
            return Err(TodoError::DuplicateList(*id));
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(TodoError::EmptyListName);
        }
        if name.chars().count() > MAX_LIST_NAME_LEN {
            return Err(TodoError::ListNameTooLong);
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        if description
            .as_ref()
            .is_some_and(|d| d.chars().count() > MAX_DESCRIPTION_LEN)
        {
            return Err(TodoError::DescriptionTooLong);
        }

        Ok((name.to_string(), description, Self::validate_color(color)?))
    }

    /// Validates a `CreateTodo` command, returning the normalized title
    fn validate_create_todo(
        state: &TodoState,
        id: &TodoId,
        list_id: &ListId,
        title: &str,
    ) -> Result<String, TodoError> {
        if state.todos.contains_key(id) {
            return Err(TodoError::DuplicateTodo(*id));
        }
        if !state.lists.contains_key(list_id) {
            return Err(TodoError::ListNotFound(*list_id));
        }
        Self::validate_title(title)
    }

    fn existing_todo<'a>(state: &'a TodoState, id: &TodoId) -> Result<&'a Todo, TodoError> {
        state.todo(id).ok_or(TodoError::TodoNotFound(*id))
    }

    /// Applies an event to state
    fn apply_event(state: &mut TodoState, event: &TodoAction) {
        match event {
            TodoAction::ListCreated {
                id,
                name,
                description,
                color,
                created_at,
            } => {
                state.lists.insert(
                    *id,
                    TodoList {
                        id: *id,
                        name: name.clone(),
                        description: description.clone(),
                        color: color.clone(),
                        created_at: *created_at,
                    },
                );
            }
            TodoAction::ListDeleted { id } => {
                state.lists.remove(id);
                state.todos.retain(|_, todo| &todo.list_id != id);
            }
            TodoAction::TodoCreated {
                id,
                list_id,
                title,
                position,
                due_date,
                created_at,
            } => {
                let todo = Todo::new(*id, *list_id, title.clone(), *position, *due_date, *created_at);
                state.todos.insert(*id, todo);
            }
            TodoAction::TodoUpdated {
                id,
                title,
                due_date,
                updated_at,
                ..
            } => {
                if let Some(todo) = state.todos.get_mut(id) {
                    todo.title.clone_from(title);
                    todo.due_date = *due_date;
                    todo.updated_at = *updated_at;
                }
            }
            TodoAction::TodoToggled {
                id,
                is_completed,
                toggled_at,
                ..
            } => {
                if let Some(todo) = state.todos.get_mut(id) {
                    todo.set_completed(*is_completed, *toggled_at);
                }
            }
            TodoAction::TodoDeleted { id, .. } => {
                state.todos.remove(id);
            }
            // Commands are not applied to state
            TodoAction::CreateList { .. }
            | TodoAction::DeleteList { .. }
            | TodoAction::CreateTodo { .. }
            | TodoAction::UpdateTodo { .. }
            | TodoAction::ToggleTodo { .. }
            | TodoAction::DeleteTodo { .. } => {}
        }
    }

    /// Turns a command into the event it produces
    fn decide(
        state: &TodoState,
        command: TodoAction,
        env: &TodoEnvironment,
    ) -> Result<TodoAction, TodoError> {
        match command {
            TodoAction::CreateList {
                id,
                name,
                description,
                color,
            } => {
                let (name, description, color) = Self::validate_create_list(
                    state,
                    &id,
                    &name,
                    description.as_deref(),
                    color.as_deref(),
                )?;
                Ok(TodoAction::ListCreated {
                    id,
                    name,
                    description,
                    color,
                    created_at: env.clock.now(),
                })
            }

            TodoAction::DeleteList { id } => {
                if !state.lists.contains_key(&id) {
                    return Err(TodoError::ListNotFound(id));
                }
                Ok(TodoAction::ListDeleted { id })
            }

            TodoAction::CreateTodo {
                id,
                list_id,
                title,
                due_date,
            } => {
                let title = Self::validate_create_todo(state, &id, &list_id, &title)?;
                Ok(TodoAction::TodoCreated {
                    id,
                    list_id,
                    title,
                    position: state.next_position(&list_id),
                    due_date,
                    created_at: env.clock.now(),
                })
            }

            TodoAction::UpdateTodo {
                id,
                title,
                due_date,
            } => {
                let todo = Self::existing_todo(state, &id)?;
                let title = Self::validate_title(&title)?;
                Ok(TodoAction::TodoUpdated {
                    id,
                    list_id: todo.list_id,
                    title,
                    due_date,
                    updated_at: env.clock.now(),
                })
            }

            TodoAction::ToggleTodo { id } => {
                let todo = Self::existing_todo(state, &id)?;
                Ok(TodoAction::TodoToggled {
                    id,
                    list_id: todo.list_id,
                    is_completed: !todo.is_completed,
                    toggled_at: env.clock.now(),
                })
            }

            TodoAction::DeleteTodo { id } => {
                let todo = Self::existing_todo(state, &id)?;
                Ok(TodoAction::TodoDeleted {
                    id,
                    list_id: todo.list_id,
                })
            }

            // Events pass through unchanged
            event => Ok(event),
        }
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<Self::Action, Self::Error> {
        // Commands are validated against current state; events (replay)
        // are applied as they are
        let event = Self::decide(state, action, env)?;
        Self::apply_event(state, &event);
        Ok(event)
    }
}
