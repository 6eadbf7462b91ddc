//! Completion-service client module
//!
//! One synchronous JSON POST per invocation: `{"model", "prompt", "max_tokens"}`
//! in, `{"replies": [text, ...]}` out. Anything other than a list of strings in
//! `replies` is treated as a contract violation, equally fatal as a transport
//! failure.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::CompletionGateway;
use crate::core::config::AppConfig;
use crate::errors::SummaryError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Client for the hosted language-model completion service.
pub struct LlmClient {
    http: Client,
    api_url: String,
    api_key: Option<String>,
    model_id: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            api_url: config.completion_api_url.clone(),
            api_key: config.completion_api_key.clone(),
            model_id: config.completion_model.clone(),
        }
    }
}

/// Validate the completion response body and extract the reply list.
///
/// # Errors
///
/// Returns `InvalidModelResponse` if `replies` is missing, not an array, or
/// contains a non-string element. An empty array is passed through; the
/// caller decides whether that is acceptable.
pub fn parse_replies(body: &Value) -> Result<Vec<String>, SummaryError> {
    let replies = body.get("replies").and_then(Value::as_array).ok_or_else(|| {
        SummaryError::InvalidModelResponse("response has no 'replies' list".to_string())
    })?;

    replies
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| {
                SummaryError::InvalidModelResponse("non-string entry in 'replies'".to_string())
            })
        })
        .collect()
}

#[async_trait]
impl CompletionGateway for LlmClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Vec<String>, SummaryError> {
        info!(
            "Calling completion service ({}) with a {} character prompt",
            self.model_id,
            prompt.chars().count()
        );

        let request_body = json!({
            "model": self.model_id,
            "prompt": prompt,
            "max_tokens": max_tokens,
        });

        let mut request = self.http.post(&self.api_url).json(&request_body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SummaryError::ModelError(format!("completion request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SummaryError::ModelError(format!(
                "completion service HTTP {status}: {error_text}"
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            SummaryError::InvalidModelResponse(format!("response body parse: {e}"))
        })?;

        parse_replies(&body)
    }
}
