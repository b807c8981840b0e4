use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A by-name invocation of an operation on a registered interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationCall {
    #[serde(default)]
    pub interface: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub args: Map<String, Value>,
    #[serde(default)]
    pub result_key: String,
}

impl OperationCall {
    pub fn new(interface: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn result_key(mut self, key: impl Into<String>) -> Self {
        self.result_key = key.into();
        self
    }

    /// `Interface.Method`, as shown in run reports.
    pub fn label(&self) -> String {
        format!("{}.{}", self.interface, self.method)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OperationOutcome {
    pub result_key: String,
    #[schema(value_type = Object)]
    pub value: Value,
}
