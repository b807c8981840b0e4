// src/presentation/http/openapi.rs
use crate::application::dto::{OperationCall, SummaryRequest, SummaryResult};
use crate::presentation::http::controllers::operations::{OperationFailure, OperationResponse};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::text::slug,
        crate::presentation::http::controllers::text::summarize,
        crate::presentation::http::controllers::text::summarize_json,
        crate::presentation::http::controllers::operations::run_operation,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            SummaryRequest,
            SummaryResult,
            OperationCall,
            OperationResponse,
            OperationFailure
        )
    ),
    tags(
        (name = "Text", description = "Slug and summary endpoints"),
        (name = "Operations", description = "By-name operation runner"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "TextOps API",
        description = "Text normalization service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn default_snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
