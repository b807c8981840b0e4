// src/presentation/http/controllers/text.rs
use crate::application::{
    dto::{SummaryRequest, SummaryResult},
    queries::{SlugifyQuery, SummarizeQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugParams {
    /// Text to slugify.
    #[serde(default)]
    pub value: String,
}

#[utoipa::path(
    get,
    path = "/slug",
    params(SlugParams),
    responses(
        (status = 200, description = "Slug of the given value.", body = String)
    ),
    tag = "Text"
)]
pub async fn slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugParams>,
) -> HttpResult<Json<String>> {
    state
        .services
        .text_queries
        .slugify(SlugifyQuery {
            value: params.value,
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = String,
    responses(
        (status = 200, description = "Text truncated to 120 characters plus an ellipsis.", body = String)
    ),
    tag = "Text"
)]
pub async fn summarize(
    Extension(state): Extension<HttpState>,
    Json(text): Json<String>,
) -> HttpResult<Json<String>> {
    state
        .services
        .text_queries
        .summarize(SummarizeQuery { text })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/summarize-json",
    request_body = SummaryRequest,
    responses(
        (status = 200, description = "Summary with length details.", body = SummaryResult),
        (status = 400, description = "Non-positive maxLength.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Text"
)]
pub async fn summarize_json(
    Extension(state): Extension<HttpState>,
    Json(request): Json<SummaryRequest>,
) -> HttpResult<Json<SummaryResult>> {
    state
        .services
        .text_queries
        .summarize_detailed(request)
        .await
        .into_http()
        .map(Json)
}
