mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_welcome_page_renders() {
    let app = common::spawn_app(None, true);

    let response = app.server.get("/").await;

    response.assert_status_ok();
    response.assert_text_contains("Welcome to Laravel");

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

#[tokio::test]
async fn test_welcome_page_ignores_database_outage() {
    let app = common::spawn_app(Some("connection refused"), false);

    let response = app.server.get("/").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::spawn_app(None, true);

    let response = app.server.get("/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
}
