// tests/support/helpers.rs
use super::mocks;
use axum::body;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use textops_core::application::{
    ports::time::Clock,
    registry::{Lifetime, ServiceRegistry},
    services::ApplicationServices,
};
use textops_core::infrastructure::text_ops::NativeTextOps;
use textops_core::presentation::http::{routes::build_router, state::HttpState};

pub fn native_registry() -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();
    registry.register_text_ops(Lifetime::Scoped, || Arc::new(NativeTextOps::default()));
    registry
}

pub fn build_test_state(registry: ServiceRegistry) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    let services = Arc::new(ApplicationServices::new(Arc::new(registry), clock));
    HttpState { services }
}

pub async fn make_test_router() -> axum::Router {
    make_test_router_with(native_registry()).await
}

/// Build a test router backed by the given registry.
pub async fn make_test_router_with(registry: ServiceRegistry) -> axum::Router {
    let state = build_test_state(registry);
    build_router(state, &["*".to_string()])
}

/// Read the status and JSON body of a response, asserting a JSON content type.
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {}",
        ct
    );
    let json: Value = serde_json::from_slice(&body_bytes).expect("expected valid json body");
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    let (status, json) = read_json(resp).await;
    assert_eq!(status, expected_status);
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
