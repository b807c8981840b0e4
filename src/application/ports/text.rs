// src/application/ports/text.rs
use crate::domain::text::{SummaryLimit, summarize_with_limit};
use async_trait::async_trait;

/// Slug and summary operations exposed to callers and to the operation runner.
///
/// `summarize` is asynchronous only as a calling convention; implementations
/// are expected to complete without suspending.
#[async_trait]
pub trait TextOps: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    async fn summarize(&self, text: &str) -> String;

    async fn summarize_with_limit(&self, text: &str, limit: SummaryLimit) -> String {
        summarize_with_limit(text, limit).into()
    }
}
