// tests/e2e_http.rs
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

mod support;

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// /health が200を返すことを確認する
#[tokio::test]
async fn e2e_health_returns_ok() {
    let app = support::make_test_router().await;
    let resp = app.oneshot(get("/health")).await.unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    // Directly call the handler to confirm it works without router layers
    let direct = textops_core::presentation::http::routes::health().await;
    assert_eq!(direct.0.status, "ok");
}

#[tokio::test]
async fn e2e_slug_endpoint_slugifies_query_value() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(get("/slug?value=%20%20Hello%20World%20%20"))
        .await
        .unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!("hello-world"));
}

/// タブは保持されることを確認する
#[tokio::test]
async fn e2e_slug_endpoint_keeps_tabs() {
    let app = support::make_test_router().await;
    let resp = app.oneshot(get("/slug?value=%09A%20B")).await.unwrap();
    let (_, json) = support::read_json(resp).await;
    assert_eq!(json, json!("\ta-b"));
}

/// value を省略した場合は空文字列として扱われることを確認する
#[tokio::test]
async fn e2e_slug_endpoint_without_value_returns_empty_slug() {
    let app = support::make_test_router().await;
    let resp = app.oneshot(get("/slug")).await.unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!(""));
}

#[tokio::test]
async fn e2e_summarize_truncates_long_text() {
    let app = support::make_test_router().await;
    let text = "a".repeat(150);
    let resp = app
        .oneshot(json_request("/summarize", json!(text)))
        .await
        .unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    let summary = json.as_str().expect("string body");
    assert_eq!(summary.chars().count(), 123);
    assert!(summary.ends_with("..."));
}

#[tokio::test]
async fn e2e_summarize_keeps_exact_boundary() {
    let app = support::make_test_router().await;
    let text = "b".repeat(120);
    let resp = app
        .oneshot(json_request("/summarize", json!(text.clone())))
        .await
        .unwrap();
    let (_, json) = support::read_json(resp).await;
    assert_eq!(json, json!(text));
}

#[tokio::test]
async fn e2e_summarize_json_reports_lengths_and_metadata() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(json_request(
            "/summarize-json",
            json!({ "text": "abcdefghij", "maxLength": 4, "includeMetadata": true }),
        ))
        .await
        .unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"], "abcd...");
    assert_eq!(json["originalLength"], 10);
    assert_eq!(json["summaryLength"], 7);
    assert_eq!(json["metadata"]["truncated"], true);
    assert_eq!(json["metadata"]["maxLength"], 4);
    assert_eq!(json["metadata"]["generatedAt"], "2024-01-01T00:00:00+00:00");
}

#[tokio::test]
async fn e2e_summarize_json_defaults_and_omits_metadata() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(json_request("/summarize-json", json!({ "text": "short" })))
        .await
        .unwrap();
    let (_, json) = support::read_json(resp).await;
    assert_eq!(json["summary"], "short");
    assert!(json.get("metadata").is_none());
}

/// maxLength が0の場合は 400 Bad Request を返すことを確認する
#[tokio::test]
async fn e2e_summarize_json_rejects_zero_max_length() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(json_request(
            "/summarize-json",
            json!({ "text": "anything", "maxLength": 0 }),
        ))
        .await
        .unwrap();
    support::assert_error_response(resp, StatusCode::BAD_REQUEST, "Bad Request").await;
}

#[tokio::test]
async fn e2e_op_run_executes_slugify() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(json_request(
            "/op/run",
            json!({
                "interface": "ITextOps",
                "method": "Slugify",
                "args": { "input": "Hello World Test" },
                "resultKey": "slug"
            }),
        ))
        .await
        .unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["result"], "hello-world-test");
    assert_eq!(json["resultKey"], "slug");
    assert_eq!(json["success"], true);
}

/// 未登録インターフェースは success=false の 400 を返すことを確認する
#[tokio::test]
async fn e2e_op_run_unknown_interface_returns_400() {
    let app = support::make_test_router().await;
    let resp = app
        .oneshot(json_request(
            "/op/run",
            json!({ "interface": "INonExistent", "method": "SomeMethod", "args": {} }),
        ))
        .await
        .unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(
        json["error"]
            .as_str()
            .unwrap_or("")
            .contains("interface 'INonExistent' not registered")
    );
}

#[tokio::test]
async fn e2e_registry_swap_changes_behaviour() {
    let mut registry = support::native_registry();
    registry.register_text_ops(
        textops_core::application::registry::Lifetime::Transient,
        || std::sync::Arc::new(support::EchoTextOps),
    );
    let app = support::make_test_router_with(registry).await;
    let resp = app
        .oneshot(get("/slug?value=Hello%20World"))
        .await
        .unwrap();
    let (_, json) = support::read_json(resp).await;
    assert_eq!(json, json!("Hello World"));
}

#[tokio::test]
async fn e2e_openapi_document_is_served() {
    let app = support::make_test_router().await;
    let resp = app.oneshot(get("/api-docs/openapi.json")).await.unwrap();
    let (status, json) = support::read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["paths"].get("/op/run").is_some());
}
