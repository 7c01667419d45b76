mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use short_url_service::routes::app_router;
use tower::ServiceExt;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_router_assigns_request_id() {
    let ctx = common::create_test_state();
    let app = app_router(ctx.state);

    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response.headers().get("x-request-id").unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_router_echoes_client_request_id() {
    let ctx = common::create_test_state();
    let app = app_router(ctx.state);

    let request = Request::builder()
        .uri("/api/health")
        .header("x-request-id", "client-supplied-id")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "client-supplied-id"
    );
}

#[tokio::test]
async fn test_router_redirects_short_code() {
    let ctx = common::create_test_state();
    ctx.repo.insert("routed1", "https://example.com/routed");
    let app = app_router(ctx.state.clone());

    let response = app.oneshot(get("/routed1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/routed"
    );
}

#[tokio::test]
async fn test_router_trims_trailing_slash() {
    let ctx = common::create_test_state();
    ctx.repo.insert("slashed", "https://example.com/slashed");
    let app = app_router(ctx.state.clone());

    let response = app.oneshot(get("/api/stats/slashed/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["short_url"], "slashed");
}

#[tokio::test]
async fn test_router_api_paths_are_not_short_codes() {
    let ctx = common::create_test_state();
    ctx.repo.insert("health", "https://example.com/shadow");
    let app = app_router(ctx.state.clone());

    let response = app.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::LOCATION).is_none());
}

#[tokio::test]
async fn test_router_round_trip() {
    let ctx = common::create_test_state();

    let create = Request::builder()
        .method("POST")
        .uri("/api/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"url":"www.rust-lang.org","alias":"rusty"}"#))
        .unwrap();
    let response = app_router(ctx.state.clone()).oneshot(create).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app_router(ctx.state.clone())
        .oneshot(get("/rusty"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "http://www.rust-lang.org"
    );
}
