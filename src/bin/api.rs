use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tldr_reader::api::{AppState, handler};
use tldr_reader::core::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tldr_reader::setup_logging();

    let config = AppConfig::from_env().context("Config error")?;

    // Models are loaded once per cold start and shared by every invocation.
    info!("Initializing AI Processor... (This may take a moment)");
    let state = Arc::new(AppState::initialize(&config).await);
    info!("Initialization complete.");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let state = Arc::clone(&state);
        async move { handler(&state, event).await }
    }))
    .await
    .map_err(|e| anyhow!(e))
}
