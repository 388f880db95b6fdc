//! Date helpers for due dates.
//!
//! Every function here is total: an absent due date yields `None`, `false`
//! or an empty string. "Today" is always passed in, usually from
//! [`listmark_core::environment::Calendar::today`].

use crate::types::{DueDate, Todo};
use chrono::NaiveDate;

/// Calendar-date component of a due date.
#[must_use]
pub fn extract_date(value: Option<DueDate>) -> Option<NaiveDate> {
    value.map(|due| due.date())
}

/// A todo is overdue when it is incomplete and its due date is before `today`.
#[must_use]
pub fn is_overdue(todo: &Todo, today: NaiveDate) -> bool {
    if todo.is_completed {
        return false;
    }
    extract_date(todo.due_date).is_some_and(|due| due < today)
}

/// Whether the todo is due on `today`, completed or not.
#[must_use]
pub fn is_due_today(todo: &Todo, today: NaiveDate) -> bool {
    extract_date(todo.due_date) == Some(today)
}

/// Display form, e.g. `Jan 05, 2024`.
#[must_use]
pub fn format_date(value: Option<DueDate>) -> String {
    extract_date(value)
        .map(|date| date.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Value for an `<input type="date">`, e.g. `2024-01-05`.
#[must_use]
pub fn format_date_input(value: Option<DueDate>) -> String {
    extract_date(value)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
