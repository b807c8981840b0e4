// src/infrastructure/text_ops.rs
use crate::{
    application::ports::text::TextOps,
    domain::text::{self as normalize, TextOpsEnv},
};
use async_trait::async_trait;

/// In-process implementation backed by the domain text functions.
#[derive(Debug, Default, Clone)]
pub struct NativeTextOps {
    env: Option<TextOpsEnv>,
}

impl NativeTextOps {
    pub fn new(env: Option<TextOpsEnv>) -> Self {
        Self { env }
    }

    /// The context supplied at construction. Neither operation reads it.
    pub fn env(&self) -> Option<&TextOpsEnv> {
        self.env.as_ref()
    }
}

#[async_trait]
impl TextOps for NativeTextOps {
    fn slugify(&self, input: &str) -> String {
        normalize::slugify(input).into()
    }

    async fn summarize(&self, text: &str) -> String {
        normalize::summarize(text).into()
    }
}
