// src/bin/run_operations.rs
//! Runs a batch of operation calls against the manifest-configured registry
//! and prints one `Interface.Method -> result` line per call.
//!
//! Usage: `run_operations [calls.json]`. Without a file a built-in slugify and
//! summarize pair is run.
use anyhow::{Context, Result};
use std::{path::PathBuf, sync::Arc};
use textops_core::application::{dto::OperationCall, executor::OperationExecutor};
use textops_core::config::AppConfig;
use textops_core::infrastructure::manifest;

fn default_calls() -> Vec<OperationCall> {
    vec![
        OperationCall::new("ITextOps", "Slugify")
            .arg("input", "Hello World Test")
            .result_key("slug"),
        OperationCall::new("ITextOps", "SummarizeAsync")
            .arg(
                "text",
                "This is a very long text that should be summarized because it exceeds the maximum length limit",
            )
            .result_key("summary"),
    ]
}

fn load_calls(path: Option<PathBuf>) -> Result<Vec<OperationCall>> {
    let Some(path) = path else {
        return Ok(default_calls());
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env()?;
    let registry = manifest::build_registry(
        config.manifest_path().map(PathBuf::as_path),
        &config.text_ops_env(),
    )?;
    let calls = load_calls(std::env::args_os().nth(1).map(PathBuf::from))?;

    println!("Running operations from manifest...");
    let executor = OperationExecutor::new(Arc::new(registry));
    for entry in executor.execute_all(calls).await {
        println!("{}", entry.report_line());
    }
    Ok(())
}
