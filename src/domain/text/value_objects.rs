use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Character bound applied by [`crate::domain::text::summarize`].
pub const DEFAULT_SUMMARY_LIMIT: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    text: String,
    truncated: bool,
}

impl Summary {
    pub(crate) fn new(text: String, truncated: bool) -> Self {
        Self { text, truncated }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the source exceeded the limit and an ellipsis was appended.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Length in characters, the same unit the limit is expressed in.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Summary> for String {
    fn from(value: Summary) -> Self {
        value.text
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimit(usize);

impl SummaryLimit {
    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::Validation(
                "summary limit must be positive".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SummaryLimit {
    fn default() -> Self {
        Self(DEFAULT_SUMMARY_LIMIT)
    }
}

impl TryFrom<i64> for SummaryLimit {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        let value = usize::try_from(value).map_err(|_| {
            DomainError::Validation("summary limit must be positive".into())
        })?;
        Self::new(value)
    }
}

/// Optional context handed to a text-ops implementation at construction.
///
/// Implementations hold it but never consult it; it exists so that callers can
/// wire per-tenant state without changing the operation signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOpsEnv {
    pub tenant_id: String,
}

impl TextOpsEnv {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
        }
    }
}
