//! HTML rendering.
//!
//! Plain functions from state to markup. Every piece of user text goes
//! through [`escape`]. Elements that later responses swap out-of-band have
//! fixed ids:
//!
//! - `page-title-count`: hidden span carrying `data-count` and
//!   `data-title-base`; the page script rebuilds `document.title` from it
//! - `list-count-{list_id}`: the sidebar badge of a list
//! - `todo-{todo_id}`: a todo row (primary target of row mutations)
//! - `list-panel`: the main panel of the selected list

use chrono::NaiveDate;
use listmark_todo::dates::{format_date, format_date_input, is_due_today, is_overdue};
use listmark_todo::error::{MAX_DESCRIPTION_LEN, MAX_LIST_NAME_LEN, MAX_TITLE_LEN};
use listmark_todo::types::DEFAULT_LIST_COLOR;
use listmark_todo::{ListId, Todo, TodoList, TodoState};
use listmark_web::{escape, OobElement};

/// Id of the element the title script reads
pub const TITLE_COUNT_ID: &str = "page-title-count";

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Id of the element that shows rejected requests
pub const ERRORS_ID: &str = "errors";

// Rebuilds the tab title whenever the title-count element was swapped, and
// moves error fragments into the errors box since htmx skips 4xx/5xx swaps.
const PAGE_SCRIPT: &str = r#"
function listmarkSyncTitle() {
  var el = document.getElementById("page-title-count");
  if (!el) { return; }
  var count = parseInt(el.getAttribute("data-count"), 10) || 0;
  var base = el.getAttribute("data-title-base") || document.title;
  document.title = count > 0 ? "(" + count + ") " + base : base;
}
function listmarkShowError(event) {
  var box = document.getElementById("errors");
  if (box) { box.innerHTML = event.detail.xhr.responseText; }
}
function listmarkClearError(event) {
  var box = document.getElementById("errors");
  if (box && event.detail.successful) { box.innerHTML = ""; }
}
document.addEventListener("htmx:oobAfterSwap", listmarkSyncTitle);
document.addEventListener("htmx:afterSettle", listmarkSyncTitle);
document.addEventListener("htmx:responseError", listmarkShowError);
document.addEventListener("htmx:afterRequest", listmarkClearError);
"#;

/// `"{list} - {app}"`, the title without a count
#[must_use]
pub fn title_base(list_name: &str, app_name: &str) -> String {
    format!("{list_name} - {app_name}")
}

/// Page title for a list: `"({N}) {list} - {app}"`, or no prefix when nothing is open.
#[must_use]
pub fn title_text(list_name: &str, incomplete: usize, app_name: &str) -> String {
    let base = title_base(list_name, app_name);
    if incomplete > 0 {
        format!("({incomplete}) {base}")
    } else {
        base
    }
}

fn title_count_span(base: &str, incomplete: usize) -> String {
    format!(
        r#"<span id="{TITLE_COUNT_ID}" hidden data-count="{incomplete}" data-title-base="{}"></span>"#,
        escape(base)
    )
}

/// Out-of-band replacement for the title-count element
#[must_use]
pub fn title_count_oob(list: &TodoList, incomplete: usize, app_name: &str) -> OobElement {
    OobElement::new("span", TITLE_COUNT_ID)
        .attr("hidden", "")
        .attr("data-count", incomplete.to_string())
        .attr("data-title-base", title_base(&list.name, app_name))
}

fn list_badge_id(list_id: ListId) -> String {
    format!("list-count-{list_id}")
}

/// Out-of-band replacement for a list's sidebar badge
#[must_use]
pub fn list_badge_oob(list_id: ListId, incomplete: usize) -> OobElement {
    OobElement::new("span", list_badge_id(list_id))
        .attr("class", "badge")
        .attr("data-count", incomplete.to_string())
        .text(incomplete.to_string())
}

/// One sidebar entry with its badge
#[must_use]
pub fn sidebar_item(list: &TodoList, incomplete: usize, selected: bool) -> String {
    let id = list.id;
    let class = if selected { r#" class="selected""# } else { "" };
    format!(
        r##"<li id="list-{id}"{class}><a href="/app/lists/{id}" hx-get="/app/lists/{id}" hx-target="#list-panel" hx-swap="outerHTML" hx-push-url="true"><span class="swatch" style="background-color: {color}"></span>{name}</a> <span id="{badge}" class="badge" data-count="{incomplete}">{incomplete}</span></li>"##,
        color = escape(&list.color),
        name = escape(&list.name),
        badge = list_badge_id(id),
    )
}

const LIST_ITEMS_ID: &str = "list-items";

fn sidebar_items(state: &TodoState, selected: Option<ListId>) -> String {
    state
        .lists_ordered()
        .into_iter()
        .map(|list| {
            sidebar_item(
                list,
                state.incomplete_count(&list.id),
                selected == Some(list.id),
            )
        })
        .collect()
}

/// Out-of-band replacement for the whole sidebar list, moving the
/// `selected` class onto `selected`
#[must_use]
pub fn sidebar_items_oob(state: &TodoState, selected: ListId) -> OobElement {
    OobElement::new("ul", LIST_ITEMS_ID).html(sidebar_items(state, Some(selected)))
}

fn sidebar(state: &TodoState, selected: Option<ListId>) -> String {
    let items = sidebar_items(state, selected);

    format!(
        r##"<nav id="sidebar">
<h2>Lists</h2>
<ul id="{LIST_ITEMS_ID}">{items}</ul>
<form hx-post="/api/lists" hx-target="#list-items" hx-swap="beforeend" hx-on::after-request="if (event.detail.successful) this.reset()">
<input name="name" placeholder="New list" required maxlength="{MAX_LIST_NAME_LEN}">
<input name="description" placeholder="Description" maxlength="{MAX_DESCRIPTION_LEN}">
<input name="color" type="color" value="{DEFAULT_LIST_COLOR}">
<button type="submit">Add list</button>
</form>
<div id="{ERRORS_ID}" aria-live="polite"></div>
</nav>"##
    )
}

/// A todo row with its toggle, edit form and delete button.
///
/// Overdue and due-today badges are computed against `today`.
#[must_use]
pub fn todo_row(todo: &Todo, today: NaiveDate) -> String {
    let id = todo.id;
    let overdue = is_overdue(todo, today);
    let due_today = is_due_today(todo, today);

    let mut class = String::from("todo");
    if todo.is_completed {
        class.push_str(" completed");
    }
    if overdue {
        class.push_str(" overdue");
    }

    let due = if todo.due_date.is_some() {
        let badge = if overdue {
            r#" <span class="badge badge-overdue">Overdue</span>"#
        } else if due_today {
            r#" <span class="badge badge-today">Due today</span>"#
        } else {
            ""
        };
        format!(
            r#"<span class="due-date">{}</span>{badge}"#,
            escape(&format_date(todo.due_date))
        )
    } else {
        String::new()
    };

    let checked = if todo.is_completed { " checked" } else { "" };

    format!(
        r##"<li id="todo-{id}" class="{class}" data-position="{position}">
<input type="checkbox" hx-patch="/api/todos/{id}/toggle" hx-target="#todo-{id}" hx-swap="outerHTML"{checked}>
<span class="todo-title">{title}</span>{due}
<form class="todo-edit" hx-put="/api/todos/{id}" hx-target="#todo-{id}" hx-swap="outerHTML">
<input name="title" value="{title}" required maxlength="{MAX_TITLE_LEN}">
<input name="due_date" type="date" value="{due_input}">
<button type="submit">Save</button>
</form>
<button hx-delete="/api/todos/{id}" hx-target="#todo-{id}" hx-swap="outerHTML" hx-confirm="Delete this todo?">Delete</button>
</li>"##,
        position = todo.position,
        title = escape(&todo.title),
        due_input = format_date_input(todo.due_date),
    )
}

/// The panel of one list: header, add-todo form and rows.
#[must_use]
pub fn list_panel(state: &TodoState, list: &TodoList, today: NaiveDate) -> String {
    let id = list.id;
    let rows: String = state
        .todos_in(&id)
        .into_iter()
        .map(|todo| todo_row(todo, today))
        .collect();
    let description = list
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="description">{}</p>"#, escape(d)))
        .unwrap_or_default();

    format!(
        r##"<section id="list-panel" data-list-id="{id}">
<header>
<h1>{name}</h1>{description}
<button hx-delete="/api/lists/{id}" hx-confirm="Delete this list and all its todos?">Delete list</button>
</header>
<form hx-post="/api/todos" hx-target="#todo-items" hx-swap="beforeend" hx-on::after-request="if (event.detail.successful) this.reset()">
<input type="hidden" name="list_id" value="{id}">
<input name="title" placeholder="Add a todo" required maxlength="{MAX_TITLE_LEN}">
<input name="due_date" type="date">
<button type="submit">Add</button>
</form>
<ul id="todo-items">{rows}</ul>
</section>"##,
        name = escape(&list.name),
    )
}

fn layout(title: &str, title_count: &str, sidebar: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{HTMX_SRC}"></script>
<script>{PAGE_SCRIPT}</script>
</head>
<body>
{title_count}
{sidebar}
<main id="main">
{main}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Full page for one list.
#[must_use]
pub fn list_page(
    state: &TodoState,
    list: &TodoList,
    today: NaiveDate,
    app_name: &str,
) -> String {
    let incomplete = state.incomplete_count(&list.id);
    layout(
        &title_text(&list.name, incomplete, app_name),
        &title_count_span(&title_base(&list.name, app_name), incomplete),
        &sidebar(state, Some(list.id)),
        &list_panel(state, list, today),
    )
}

/// Landing page with the sidebar and no list selected.
#[must_use]
pub fn index_page(state: &TodoState, app_name: &str) -> String {
    let main = if state.lists.is_empty() {
        r#"<section id="list-panel"><p class="empty">Create a list to get started.</p></section>"#
    } else {
        r#"<section id="list-panel"><p class="empty">Pick a list.</p></section>"#
    };
    layout(
        app_name,
        &format!(
            r#"<span id="{TITLE_COUNT_ID}" hidden data-count="0" data-title-base="{}"></span>"#,
            escape(app_name)
        ),
        &sidebar(state, None),
        main,
    )
}
