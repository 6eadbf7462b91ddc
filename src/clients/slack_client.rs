//! Slack API client module
//!
//! Encapsulates the two Slack calls the job makes: one `conversations.history`
//! page and one `chat.postMessage`. Failures propagate immediately; the
//! invoking scheduler owns retries.

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::{
    SlackApiChatPostMessageRequest, SlackApiConversationsHistoryRequest,
};
use slack_morphism::{
    SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackTs,
};
use tracing::warn;

use super::ChatGateway;
use crate::core::models::ChannelMessage;
use crate::errors::SummaryError;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface an error at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

/// Slack API client authenticated with the bot token resolved at invocation
/// start.
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }

    fn session_client() -> Result<&'static SlackHyperClient, SummaryError> {
        SLACK_CLIENT.as_ref().ok_or_else(|| {
            SummaryError::SlackApiError("Slack HTTP connector not initialized".to_string())
        })
    }
}

#[async_trait]
impl ChatGateway for SlackClient {
    async fn channel_history(
        &self,
        channel_id: &str,
        oldest_unix_ts: i64,
        limit: u16,
    ) -> Result<Vec<ChannelMessage>, SummaryError> {
        let session = Self::session_client()?.open_session(&self.token);

        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel_id.to_string()))
            .with_oldest(SlackTs(oldest_unix_ts.to_string()))
            .with_limit(limit);

        let result = session.conversations_history(&request).await?;

        Ok(result
            .messages
            .into_iter()
            .map(|m| ChannelMessage {
                text: m.content.text,
            })
            .collect())
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<(), SummaryError> {
        let session = Self::session_client()?.open_session(&self.token);

        let post_req = SlackApiChatPostMessageRequest::new(
            SlackChannelId(channel_id.to_string()),
            SlackMessageContent::new().with_text(text.to_string()),
        );

        session.chat_post_message(&post_req).await?;

        Ok(())
    }
}
