use crate::domain::text::DEFAULT_SUMMARY_LIMIT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

fn default_max_length() -> i64 {
    DEFAULT_SUMMARY_LIMIT as i64
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_max_length")]
    pub max_length: i64,
    #[serde(default)]
    pub include_metadata: bool,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: default_max_length(),
            include_metadata: false,
        }
    }

    pub fn with_max_length(mut self, max_length: i64) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    pub summary: String,
    /// Length of the submitted text, in characters.
    pub original_length: usize,
    pub summary_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub metadata: Option<BTreeMap<String, serde_json::Value>>,
}
