//! In-memory state of all lists and todos, and the queries views need.
//!
//! The incomplete count of a list is never stored. [`TodoState::incomplete_count`]
//! walks the current todo set every time it is asked, so a count can't go
//! stale after a create, toggle or delete.

use crate::types::{ListId, Todo, TodoId, TodoList};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All lists and todos
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TodoState {
    /// All lists indexed by ID
    pub lists: HashMap<ListId, TodoList>,
    /// All todos indexed by ID; `Todo::list_id` links them to their list
    pub todos: HashMap<TodoId, Todo>,
}

impl TodoState {
    /// Creates an empty state
    #[must_use]
    pub fn new() -> Self {
        Self {
            lists: HashMap::new(),
            todos: HashMap::new(),
        }
    }

    /// Returns a list by ID
    #[must_use]
    pub fn list(&self, id: &ListId) -> Option<&TodoList> {
        self.lists.get(id)
    }

    /// Returns a todo by ID
    #[must_use]
    pub fn todo(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.get(id)
    }

    /// Lists in creation order (name breaks ties)
    #[must_use]
    pub fn lists_ordered(&self) -> Vec<&TodoList> {
        let mut lists: Vec<&TodoList> = self.lists.values().collect();
        lists.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        lists
    }

    /// Todos of a list, ordered by position
    #[must_use]
    pub fn todos_in(&self, list_id: &ListId) -> Vec<&Todo> {
        let mut todos: Vec<&Todo> = self
            .todos
            .values()
            .filter(|todo| &todo.list_id == list_id)
            .collect();
        todos.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.created_at.cmp(&b.created_at))
                .then_with(|| a.id.cmp(&b.id))
        });
        todos
    }

    /// Number of todos in the list that are not completed.
    ///
    /// Unknown lists have no todos, so they count 0.
    #[must_use]
    pub fn incomplete_count(&self, list_id: &ListId) -> usize {
        self.todos
            .values()
            .filter(|todo| &todo.list_id == list_id && !todo.is_completed)
            .count()
    }

    /// Position for a todo appended to the list
    #[must_use]
    pub fn next_position(&self, list_id: &ListId) -> i64 {
        self.todos
            .values()
            .filter(|todo| &todo.list_id == list_id)
            .map(|todo| todo.position)
            .max()
            .map_or(0, |max| max + 1)
    }
}
