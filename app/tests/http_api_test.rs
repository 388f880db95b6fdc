//! End-to-end HTTP tests: page titles, out-of-band count fragments, errors.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use listmark::{build_router, AppState, Config};
use listmark_testing::test_clock;
use listmark_todo::{ListId, TodoAction, TodoId};
use std::sync::Arc;
use tower::ServiceExt;

// ============================================================================
// Test Fixtures
// ============================================================================

struct TestApp {
    state: AppState,
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    text: String,
}

impl TestApp {
    fn new() -> Self {
        let config = Config::from_lookup(|key| match key {
            "TODAY_UTC_OFFSET" => Some("utc".to_string()),
            _ => None,
        });
        let state = AppState::from_config(&config, Arc::new(test_clock()));
        let router = build_router(state.clone());
        Self { state, router }
    }

    async fn list(&self, name: &str) -> ListId {
        let id = ListId::new();
        self.state
            .store
            .send(TodoAction::CreateList {
                id,
                name: name.to_string(),
                description: None,
                color: None,
            })
            .await
            .unwrap();
        id
    }

    async fn todo(&self, list_id: ListId, title: &str) -> TodoId {
        let id = TodoId::new();
        self.state
            .store
            .send(TodoAction::CreateTodo {
                id,
                list_id,
                title: title.to_string(),
                due_date: None,
            })
            .await
            .unwrap();
        id
    }

    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            headers,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn htmx_get(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .uri(uri)
                .header("HX-Request", "true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn form(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn empty(&self, method: Method, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn incomplete(&self, list_id: ListId) -> usize {
        self.state
            .store
            .state(|s| s.incomplete_count(&list_id))
            .await
    }
}

fn assert_title_count_oob(text: &str, count: usize) {
    assert!(text.contains(r#"id="page-title-count""#), "missing title count in {text}");
    assert!(text.contains(r#"hx-swap-oob="true""#), "missing OOB directive in {text}");
    assert!(
        text.contains(&format!(r#"data-count="{count}""#)),
        "expected data-count={count} in {text}"
    );
}

// ============================================================================
// Page titles
// ============================================================================

#[tokio::test]
async fn title_without_incomplete_todos() {
    let app = TestApp::new();
    let list_id = app.list("Shopping").await;

    let response = app.get(&format!("/app/lists/{list_id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<title>Shopping - App</title>"));
    assert!(!response.text.contains("(0)"));
}

#[tokio::test]
async fn title_with_incomplete_todos() {
    let app = TestApp::new();
    let list_id = app.list("Work Tasks").await;

    for i in 0..3 {
        let response = app
            .form(
                Method::POST,
                "/api/todos",
                &format!("list_id={list_id}&title=Task+{}", i + 1),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.get(&format!("/app/lists/{list_id}")).await;
    assert!(response.text.contains("<title>(3) Work Tasks - App</title>"));
}

#[tokio::test]
async fn title_counts_only_incomplete_todos() {
    let app = TestApp::new();
    let list_id = app.list("Project").await;

    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(app.todo(list_id, &format!("Task {}", i + 1)).await);
    }
    for id in &ids[..3] {
        let response = app
            .empty(Method::PATCH, &format!("/api/todos/{id}/toggle"))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.get(&format!("/app/lists/{list_id}")).await;
    assert!(response.text.contains("<title>(2) Project - App</title>"));
}

#[tokio::test]
async fn title_without_count_when_all_complete() {
    let app = TestApp::new();
    let list_id = app.list("Chores").await;
    for title in ["Dishes", "Laundry"] {
        let id = app.todo(list_id, title).await;
        app.empty(Method::PATCH, &format!("/api/todos/{id}/toggle"))
            .await;
    }

    let response = app.get(&format!("/app/lists/{list_id}")).await;
    assert!(response.text.contains("<title>Chores - App</title>"));
    assert!(response.text.contains(r#"data-count="0""#));
    assert!(!response.text.contains("(0)"));
}

#[tokio::test]
async fn title_escapes_list_name() {
    let app = TestApp::new();
    let list_id = app.list("Q&A <draft>").await;
    app.todo(list_id, "Write answers").await;

    let response = app.get(&format!("/app/lists/{list_id}")).await;
    assert!(response
        .text
        .contains("<title>(1) Q&amp;A &lt;draft&gt; - App</title>"));
    assert!(response
        .text
        .contains(r#"data-title-base="Q&amp;A &lt;draft&gt; - App""#));
}

// ============================================================================
// Out-of-band count on mutations
// ============================================================================

#[tokio::test]
async fn toggle_returns_row_and_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    let id = app.todo(list_id, "Test Todo").await;

    let response = app
        .empty(Method::PATCH, &format!("/api/todos/{id}/toggle"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with(&format!(r#"<li id="todo-{id}""#)));
    assert!(response.text.contains(" checked>"));
    assert_title_count_oob(&response.text, 0);
    assert!(response.text.contains(&format!(r#"id="list-count-{list_id}""#)));
}

#[tokio::test]
async fn create_returns_row_and_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={list_id}&title=New+Todo&due_date="),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with(r#"<li id="todo-"#));
    assert!(response.text.contains("New Todo"));
    assert_title_count_oob(&response.text, 1);
    assert!(response
        .text
        .contains(r#"data-title-base="Work - App""#));
}

#[tokio::test]
async fn delete_returns_only_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    let id = app.todo(list_id, "Test Todo").await;

    let response = app
        .empty(Method::DELETE, &format!("/api/todos/{id}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.text.contains("<li"));
    assert_title_count_oob(&response.text, 0);
    assert_eq!(app.incomplete(list_id).await, 0);
}

#[tokio::test]
async fn delete_counts_remaining_rows() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    let first = app.todo(list_id, "One").await;
    app.todo(list_id, "Two").await;
    app.todo(list_id, "Three").await;

    let response = app
        .empty(Method::DELETE, &format!("/api/todos/{first}"))
        .await;

    assert_title_count_oob(&response.text, 2);
}

#[tokio::test]
async fn deleting_completed_todo_keeps_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    let done = app.todo(list_id, "Done").await;
    app.todo(list_id, "Open").await;
    app.empty(Method::PATCH, &format!("/api/todos/{done}/toggle"))
        .await;

    let response = app
        .empty(Method::DELETE, &format!("/api/todos/{done}"))
        .await;

    assert_title_count_oob(&response.text, 1);
}

#[tokio::test]
async fn count_is_scoped_to_the_todos_list() {
    let app = TestApp::new();
    let work = app.list("Work").await;
    let home = app.list("Home").await;
    app.todo(home, "Vacuum").await;
    app.todo(home, "Cook").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={work}&title=Report"),
        )
        .await;

    assert_title_count_oob(&response.text, 1);
    assert!(!response.text.contains(&format!("list-count-{home}")));
}

#[tokio::test]
async fn update_changes_row_not_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    let id = app.todo(list_id, "Draft").await;
    app.todo(list_id, "Other").await;

    let response = app
        .form(
            Method::PUT,
            &format!("/api/todos/{id}"),
            "title=Final&due_date=2024-12-31",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains(r#"<span class="todo-title">Final</span>"#));
    assert!(response.text.contains("Dec 31, 2024"));
    assert!(response.text.contains("badge-overdue"));
    assert_title_count_oob(&response.text, 2);
}

#[tokio::test]
async fn due_today_badge_uses_configured_calendar() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={list_id}&title=Ship&due_date=2025-01-01T09%3A30"),
        )
        .await;

    assert!(response.text.contains("badge-today"));
    assert!(response.text.contains(r#"value="2025-01-01""#));
}

#[tokio::test]
async fn due_date_with_fractional_seconds_is_accepted() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={list_id}&title=Ship&due_date=2025-01-01T09%3A30%3A15.500"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("badge-today"));
    assert_title_count_oob(&response.text, 1);
}

#[tokio::test]
async fn created_title_is_escaped() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={list_id}&title=%3Cb%3EMilk+%26+%22Eggs%22%3C%2Fb%3E"),
        )
        .await;

    assert!(response
        .text
        .contains("&lt;b&gt;Milk &amp; &quot;Eggs&quot;&lt;/b&gt;"));
    assert!(!response.text.contains("<b>"));
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn unknown_todo_is_not_found() {
    let app = TestApp::new();

    let response = app
        .empty(Method::PATCH, &format!("/api/todos/{}/toggle", TodoId::new()))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.text.contains(r#"data-code="NOT_FOUND""#));
}

#[tokio::test]
async fn unknown_list_page_is_not_found() {
    let app = TestApp::new();
    let response = app.get(&format!("/app/lists/{}", ListId::new())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_in_unknown_list_is_not_found() {
    let app = TestApp::new();
    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={}&title=Orphan", ListId::new()),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(Method::POST, "/api/todos", &format!("list_id={list_id}&title=+++"))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text.contains(r#"data-code="VALIDATION_ERROR""#));
    assert_eq!(app.incomplete(list_id).await, 0);
}

#[tokio::test]
async fn bad_due_date_is_rejected() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;

    let response = app
        .form(
            Method::POST,
            "/api/todos",
            &format!("list_id={list_id}&title=Ship&due_date=soon"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Pages, lists and plumbing
// ============================================================================

#[tokio::test]
async fn htmx_navigation_returns_panel_and_title_count() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    app.todo(list_id, "One").await;

    let response = app.htmx_get(&format!("/app/lists/{list_id}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with(r#"<section id="list-panel""#));
    assert!(!response.text.contains("<title>"));
    assert_title_count_oob(&response.text, 1);
}

#[tokio::test]
async fn htmx_navigation_moves_sidebar_selection() {
    let app = TestApp::new();
    let work = app.list("Work").await;
    let home = app.list("Home").await;
    app.todo(home, "Laundry").await;

    let page = app.get(&format!("/app/lists/{work}")).await;
    assert!(page.text.contains(&format!(r#"<li id="list-{work}" class="selected">"#)));

    let response = app.htmx_get(&format!("/app/lists/{home}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains(r#"<ul id="list-items" hx-swap-oob="true">"#));
    assert!(response.text.contains(&format!(r#"<li id="list-{home}" class="selected">"#)));
    assert!(response.text.contains(&format!(r#"<li id="list-{work}">"#)));
    assert_eq!(response.text.matches(r#"class="selected""#).count(), 1);
    assert!(response.text.contains(&format!(r#"id="list-count-{home}" class="badge" data-count="1""#)));
}

#[tokio::test]
async fn create_list_returns_sidebar_item() {
    let app = TestApp::new();

    let response = app
        .form(
            Method::POST,
            "/api/lists",
            "name=Groceries&description=&color=%2310b981",
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.starts_with(r#"<li id="list-"#));
    assert!(response.text.contains("Groceries"));
    assert!(response.text.contains("#10b981"));
    assert!(response.text.contains(r#"data-count="0""#));
}

#[tokio::test]
async fn create_list_rejects_bad_color() {
    let app = TestApp::new();
    let response = app
        .form(Method::POST, "/api/lists", "name=Groceries&color=red")
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn delete_list_redirects_and_removes_todos() {
    let app = TestApp::new();
    let list_id = app.list("Old").await;
    let todo_id = app.todo(list_id, "Stale").await;

    let response = app
        .empty(Method::DELETE, &format!("/api/lists/{list_id}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers.get("HX-Redirect").unwrap(), "/app");

    let page = app.get(&format!("/app/lists/{list_id}")).await;
    assert_eq!(page.status, StatusCode::NOT_FOUND);
    let toggle = app
        .empty(Method::PATCH, &format!("/api/todos/{todo_id}/toggle"))
        .await;
    assert_eq!(toggle.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn index_lists_sidebar_with_badges() {
    let app = TestApp::new();
    let list_id = app.list("Work").await;
    app.todo(list_id, "One").await;

    let response = app.get("/app").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text.contains("<title>App</title>"));
    assert!(response.text.contains(&format!(
        r#"<span id="list-count-{list_id}" class="badge" data-count="1">1</span>"#
    )));
}

#[tokio::test]
async fn root_redirects_to_app() {
    let app = TestApp::new();
    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.headers.get(header::LOCATION).unwrap(), "/app");
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let app = TestApp::new();
    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.contains_key("X-Correlation-ID"));
    let json: serde_json::Value = serde_json::from_str(&response.text).unwrap();
    assert_eq!(json["status"], "ok");
}
