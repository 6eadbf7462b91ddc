use slack_morphism::errors::SlackClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Missing or invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to resolve bot credentials: {0}")]
    CredentialError(String),

    #[error("Failed to access Slack API: {0}")]
    SlackApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to call completion service: {0}")]
    ModelError(String),

    #[error("Invalid model response: {0}")]
    InvalidModelResponse(String),
}

impl From<SlackClientError> for SummaryError {
    fn from(error: SlackClientError) -> Self {
        SummaryError::SlackApiError(error.to_string())
    }
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SummaryError {
    fn from(error: anyhow::Error) -> Self {
        SummaryError::SlackApiError(error.to_string())
    }
}
