// src/application/queries/text.rs
use crate::{
    application::{
        dto::{SummaryRequest, SummaryResult},
        error::{ApplicationError, ApplicationResult},
        ports::{text::TextOps, time::Clock},
        registry::{ServiceRegistry, TEXT_OPS_INTERFACE},
    },
    domain::text::SummaryLimit,
};
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

pub struct SlugifyQuery {
    pub value: String,
}

pub struct SummarizeQuery {
    pub text: String,
}

pub struct TextQueryService {
    registry: Arc<ServiceRegistry>,
    clock: Arc<dyn Clock>,
}

impl TextQueryService {
    pub fn new(registry: Arc<ServiceRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self { registry, clock }
    }

    fn text_ops(&self) -> ApplicationResult<Arc<dyn TextOps>> {
        self.registry
            .create_scope()
            .resolve_text_ops(TEXT_OPS_INTERFACE)
            .map_err(|_| {
                ApplicationError::infrastructure(format!(
                    "no implementation registered for {TEXT_OPS_INTERFACE}"
                ))
            })
    }

    pub fn slugify(&self, query: SlugifyQuery) -> ApplicationResult<String> {
        Ok(self.text_ops()?.slugify(&query.value))
    }

    pub async fn summarize(&self, query: SummarizeQuery) -> ApplicationResult<String> {
        let ops = self.text_ops()?;
        Ok(ops.summarize(&query.text).await)
    }

    /// Summarize with a caller-chosen bound and report lengths in characters.
    pub async fn summarize_detailed(
        &self,
        request: SummaryRequest,
    ) -> ApplicationResult<SummaryResult> {
        let limit = SummaryLimit::try_from(request.max_length)?;
        let ops = self.text_ops()?;
        let summary = ops.summarize_with_limit(&request.text, limit).await;

        let original_length = request.text.chars().count();
        let summary_length = summary.chars().count();

        let metadata = request.include_metadata.then(|| {
            let mut meta = BTreeMap::new();
            meta.insert(
                "truncated".to_string(),
                Value::Bool(original_length > limit.get()),
            );
            meta.insert("maxLength".to_string(), Value::from(limit.get()));
            meta.insert(
                "generatedAt".to_string(),
                Value::String(self.clock.now().to_rfc3339()),
            );
            meta
        });

        Ok(SummaryResult {
            summary,
            original_length,
            summary_length,
            metadata,
        })
    }
}
