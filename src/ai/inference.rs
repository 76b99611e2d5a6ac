//! Hugging Face hosted inference client shared by the model collaborators.

use std::time::Duration;

use hf_hub::api::tokio::ApiBuilder;
use reqwest::Client;
use serde_json::{Value, json};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use super::truncation::TokenWindow;
use crate::errors::{InferenceError, ModelLoadingError};

const REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_RETRIES: usize = 4;
/// Retry delays are 1 s, 2 s, 4 s, ... (capped) before jitter.
const DEFAULT_BACKOFF_FACTOR_MS: u64 = 500;
const TOKENIZER_FILE: &str = "tokenizer.json";

/// Client bound to one hosted model.
#[derive(Debug, Clone)]
pub struct InferenceClient {
    http: Client,
    endpoint: String,
    token: Option<String>,
    max_retries: usize,
    backoff_factor_ms: u64,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns [`ModelLoadingError`] if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        model: &str,
        token: Option<String>,
    ) -> Result<Self, ModelLoadingError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ModelLoadingError::new(model, format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!("{}/{}", base_url.trim_end_matches('/'), model),
            token,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor_ms: DEFAULT_BACKOFF_FACTOR_MS,
        })
    }

    /// Overrides how often transient failures are retried and how fast the
    /// backoff grows.
    #[must_use]
    pub fn with_retry_policy(mut self, max_retries: usize, backoff_factor_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_factor_ms = backoff_factor_ms;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs the model on `inputs` and returns the string found under
    /// `output_field` in the first result.
    ///
    /// Cold models answer 503 until they are loaded, so transient failures are
    /// retried with backoff.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint keeps failing or the response has no output.
    pub async fn generate(
        &self,
        inputs: &str,
        parameters: Value,
        output_field: &str,
    ) -> Result<String, InferenceError> {
        let body = json!({
            "inputs": inputs,
            "parameters": parameters,
            "options": { "wait_for_model": true },
        });

        let strategy = ExponentialBackoff::from_millis(2)
            .factor(self.backoff_factor_ms)
            .max_delay(Duration::from_secs(10))
            .map(jitter)
            .take(self.max_retries);

        let response = RetryIf::start(
            strategy,
            || self.post_once(&body),
            |e: &InferenceError| {
                let transient = e.is_transient();
                if transient {
                    warn!(endpoint = %self.endpoint, "Retrying inference request: {}", e);
                }
                transient
            },
        )
        .await?;

        extract_output(&response, output_field)
    }

    async fn post_once(&self, body: &Value) -> Result<Value, InferenceError> {
        let mut request = self.http.post(&self.endpoint).json(body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message: api_error_message(&error_text),
            });
        }

        let json: Value = response.json().await?;
        debug!(endpoint = %self.endpoint, "Inference response received");
        Ok(json)
    }
}

/// Pulls `[{"<field>": "..."}]` (or a bare object) out of a pipeline response.
///
/// # Errors
///
/// Returns [`InferenceError::EmptyOutput`] if the field is missing or blank.
pub fn extract_output(response: &Value, output_field: &str) -> Result<String, InferenceError> {
    let first = match response {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    first
        .and_then(|item| item.get(output_field))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or(InferenceError::EmptyOutput)
}

/// The endpoint reports failures as `{"error": "..."}`; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

/// Downloads (or reuses the cached) `tokenizer.json` of `repo`.
///
/// # Errors
///
/// Returns [`ModelLoadingError`] if the file cannot be fetched or parsed.
pub async fn load_token_window(
    model: &str,
    repo: &str,
    token: Option<String>,
    max_tokens: usize,
) -> Result<TokenWindow, ModelLoadingError> {
    info!(model, repo, "Fetching tokenizer");
    let api = ApiBuilder::new()
        .with_token(token)
        .with_progress(false)
        .build()
        .map_err(|e| ModelLoadingError::new(model, format!("hub client: {e}")))?;

    let path = api
        .model(repo.to_string())
        .get(TOKENIZER_FILE)
        .await
        .map_err(|e| ModelLoadingError::new(model, format!("tokenizer download from {repo}: {e}")))?;

    TokenWindow::from_file(&path, max_tokens)
        .map_err(|e| ModelLoadingError::new(model, format!("tokenizer parse: {e}")))
}
