// src/presentation/http/controllers/operations.rs
use crate::application::dto::OperationCall;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    #[schema(value_type = Object)]
    pub result: serde_json::Value,
    pub result_key: String,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OperationFailure {
    pub error: String,
    pub success: bool,
}

/// Every executor failure is reported as 400 with `success: false`.
#[utoipa::path(
    post,
    path = "/op/run",
    request_body = OperationCall,
    responses(
        (status = 200, description = "Operation result.", body = OperationResponse),
        (status = 400, description = "Unknown interface or method, or bad arguments.", body = OperationFailure)
    ),
    tag = "Operations"
)]
pub async fn run_operation(
    Extension(state): Extension<HttpState>,
    Json(call): Json<OperationCall>,
) -> Response {
    match state.services.operations.execute(call).await {
        Ok(outcome) => Json(OperationResponse {
            result: outcome.value,
            result_key: outcome.result_key,
            success: true,
        })
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "operation failed");
            (
                StatusCode::BAD_REQUEST,
                Json(OperationFailure {
                    error: err.to_string(),
                    success: false,
                }),
            )
                .into_response()
        }
    }
}
