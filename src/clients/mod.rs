//! Remote-service clients and the gateway traits the job is written against.
//!
//! Each external collaborator (secret store, chat API, completion service) is
//! behind an async trait so the Lambda wires in the real clients once per
//! process while tests substitute in-memory fakes.

pub mod llm_client;
pub mod secrets_client;
pub mod slack_client;

use async_trait::async_trait;

use crate::core::models::ChannelMessage;
use crate::errors::SummaryError;

/// Key-value lookup against the secret store; yields the raw string payload.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, SummaryError>;
}

/// The two chat operations the job performs.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Fetch the first page of channel history at or after `oldest_unix_ts`.
    async fn channel_history(
        &self,
        channel_id: &str,
        oldest_unix_ts: i64,
        limit: u16,
    ) -> Result<Vec<ChannelMessage>, SummaryError>;

    /// Post a plain mrkdwn message to the channel.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SummaryError>;
}

/// Single-shot call to the language-model completion service.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Returns the ordered candidate completions ("replies") for `prompt`.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<Vec<String>, SummaryError>;
}
