// src/application/executor.rs
use crate::application::{
    dto::{OperationCall, OperationOutcome},
    error::{ApplicationError, ApplicationResult},
    registry::ServiceRegistry,
};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Methods reachable by name on the text-ops interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOpsMethod {
    Slugify,
    Summarize,
}

impl TextOpsMethod {
    pub fn resolve(interface: &str, method: &str) -> ApplicationResult<Self> {
        match method {
            "Slugify" | "slugify" => Ok(Self::Slugify),
            "SummarizeAsync" | "Summarize" | "summarize" => Ok(Self::Summarize),
            _ => Err(ApplicationError::not_found(format!(
                "method '{method}' not found on interface '{interface}'"
            ))),
        }
    }

    /// Name of the single required argument.
    pub fn parameter(self) -> &'static str {
        match self {
            Self::Slugify => "input",
            Self::Summarize => "text",
        }
    }
}

/// Runs [`OperationCall`]s against the implementations held by a registry.
///
/// Every call gets its own scope, so scoped implementations are never shared
/// between two calls.
pub struct OperationExecutor {
    registry: Arc<ServiceRegistry>,
}

impl OperationExecutor {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, call: OperationCall) -> ApplicationResult<OperationOutcome> {
        let mut scope = self.registry.create_scope();
        let ops = scope.resolve_text_ops(&call.interface)?;
        let method = TextOpsMethod::resolve(&call.interface, &call.method)?;
        let argument = bind_argument(&call.args, method.parameter())?;

        tracing::info!(
            interface = %call.interface,
            method = %call.method,
            arg_count = call.args.len(),
            "executing operation"
        );

        let value = match method {
            TextOpsMethod::Slugify => ops.slugify(&argument),
            TextOpsMethod::Summarize => ops.summarize(&argument).await,
        };

        Ok(OperationOutcome {
            result_key: call.result_key,
            value: Value::String(value),
        })
    }
}

/// One executed call of a batch, keyed by `Interface.Method`.
#[derive(Debug)]
pub struct BatchEntry {
    pub label: String,
    pub outcome: ApplicationResult<OperationOutcome>,
}

impl BatchEntry {
    /// `Interface.Method -> value` on success, an error line otherwise.
    pub fn report_line(&self) -> String {
        match &self.outcome {
            Ok(outcome) => match &outcome.value {
                Value::String(text) => format!("{} -> {text}", self.label),
                other => format!("{} -> {other}", self.label),
            },
            Err(err) => format!("Error executing {}: {err}", self.label),
        }
    }
}

impl OperationExecutor {
    /// Run calls in order. A failing call does not stop the ones after it.
    pub async fn execute_all(&self, calls: Vec<OperationCall>) -> Vec<BatchEntry> {
        let mut entries = Vec::with_capacity(calls.len());
        for call in calls {
            let label = call.label();
            let outcome = self.execute(call).await;
            if let Err(err) = &outcome {
                tracing::warn!(operation = %label, error = %err, "operation failed");
            }
            entries.push(BatchEntry { label, outcome });
        }
        entries
    }
}

fn bind_argument(args: &Map<String, Value>, parameter: &str) -> ApplicationResult<String> {
    let value = args.get(parameter).ok_or_else(|| {
        ApplicationError::validation(format!("required parameter '{parameter}' not provided"))
    })?;

    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(ApplicationError::validation(
            format!("parameter '{parameter}' must be a string"),
        )),
    }
}
