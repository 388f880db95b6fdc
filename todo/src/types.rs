//! Domain types for lists and todos.
//!
//! A [`TodoList`] owns its [`Todo`]s through `Todo::list_id`. Nothing here
//! stores a per-list counter; counts are derived from the todo set by
//! [`crate::state::TodoState`].

use crate::error::TodoError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a todo list
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListId(Uuid);

impl ListId {
    /// Creates a new random `ListId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `ListId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// When a todo is due.
///
/// Due dates arrive either as a calendar date (`<input type="date">`) or as
/// a date-time (`<input type="datetime-local">`). Comparisons always use the
/// calendar date, see [`crate::dates::extract_date`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DueDate {
    /// Due on a calendar day
    Date(NaiveDate),
    /// Due at a wall-clock time
    DateTime(NaiveDateTime),
}

impl DueDate {
    /// Calendar-date component
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::DateTime(date_time) => date_time.date(),
        }
    }
}

impl From<NaiveDate> for DueDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DueDate {
    fn from(date_time: NaiveDateTime) -> Self {
        Self::DateTime(date_time)
    }
}

impl FromStr for DueDate {
    type Err = TodoError;

    /// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS`, the
    /// seconds optionally carrying a fraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::Date(date));
        }
        ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .map(Self::DateTime)
            .ok_or_else(|| TodoError::InvalidDueDate(s.to_string()))
    }
}

/// Default color for lists created without one
pub const DEFAULT_LIST_COLOR: &str = "#3b82f6";

/// A named collection of todos
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier
    pub id: ListId,
    /// Display name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// CSS hex color used for the sidebar swatch
    pub color: String,
    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Owning list
    pub list_id: ListId,
    /// Title of the todo
    pub title: String,
    /// Ordering hint within the list
    pub position: i64,
    /// Whether the todo is completed
    pub is_completed: bool,
    /// Optional due date
    pub due_date: Option<DueDate>,
    /// When the todo was created
    pub created_at: DateTime<Utc>,
    /// When the todo was last changed
    pub updated_at: DateTime<Utc>,
    /// When the todo was completed (if completed)
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// Creates a new, incomplete todo
    #[must_use]
    pub const fn new(
        id: TodoId,
        list_id: ListId,
        title: String,
        position: i64,
        due_date: Option<DueDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            title,
            position,
            is_completed: false,
            due_date,
            created_at,
            updated_at: created_at,
            completed_at: None,
        }
    }

    /// Sets the completion flag, stamping or clearing `completed_at`
    pub fn set_completed(&mut self, is_completed: bool, at: DateTime<Utc>) {
        self.is_completed = is_completed;
        self.completed_at = is_completed.then_some(at);
        self.updated_at = at;
    }
}
