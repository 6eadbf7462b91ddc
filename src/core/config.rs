use std::env;

/// Default model identifier for the completion service.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_token_secret_arn: String,
    pub channel_id: String,
    pub completion_api_url: String,
    pub completion_api_key: Option<String>,
    pub completion_model: String,
}

impl AppConfig {
    /// Read the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first missing required variable.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            slack_token_secret_arn: env::var("SLACK_BOT_TOKEN_SECRET_ARN")
                .map_err(|e| format!("SLACK_BOT_TOKEN_SECRET_ARN: {}", e))?,
            channel_id: env::var("SLACK_CHANNEL_ID")
                .map_err(|e| format!("SLACK_CHANNEL_ID: {}", e))?,
            completion_api_url: env::var("COMPLETION_API_URL")
                .map_err(|e| format!("COMPLETION_API_URL: {}", e))?,
            completion_api_key: env::var("COMPLETION_API_KEY").ok(),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
        })
    }
}
