use chrono::Utc;
use tracing::info;

use super::{HISTORY_PAGE_LIMIT, HISTORY_WINDOW_SECS};
use crate::clients::{ChatGateway, CompletionGateway};
use crate::core::models::ChannelMessage;
use crate::errors::SummaryError;
use crate::prompt::{MAX_OUTPUT_TOKENS, build_summary_prompt};

/// Outcome of the collection and summarization steps, before anything is
/// posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizeResult {
    /// First model reply, whitespace-trimmed.
    Summary(String),
    /// The window held no text; take the notice branch.
    NoMessages,
}

/// Keep only records with a present, non-empty text field.
#[must_use]
pub fn extract_texts(messages: &[ChannelMessage]) -> Vec<&str> {
    messages
        .iter()
        .filter_map(|m| m.text.as_deref())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Fetch the last 24 hours of `channel_id` and ask the model for a summary.
///
/// The model is never invoked when no text was extracted.
///
/// # Errors
///
/// Propagates history-fetch and completion errors, and raises
/// `InvalidModelResponse` when the model returns an empty reply list.
pub async fn summarize_channel<C, L>(
    chat: &C,
    llm: &L,
    channel_id: &str,
) -> Result<SummarizeResult, SummaryError>
where
    C: ChatGateway,
    L: CompletionGateway,
{
    let oldest = Utc::now().timestamp() - HISTORY_WINDOW_SECS;
    info!("Fetching Slack history since {}", oldest);

    let messages = chat
        .channel_history(channel_id, oldest, HISTORY_PAGE_LIMIT)
        .await?;
    info!("Fetched {} raw messages", messages.len());

    let texts = extract_texts(&messages);
    info!("Extracted {} text messages", texts.len());

    if texts.is_empty() {
        return Ok(SummarizeResult::NoMessages);
    }

    let prompt = build_summary_prompt(&texts);
    let replies = llm.complete(&prompt, MAX_OUTPUT_TOKENS).await?;

    let summary = replies.first().ok_or_else(|| {
        SummaryError::InvalidModelResponse("model returned an empty reply list".to_string())
    })?;

    Ok(SummarizeResult::Summary(summary.trim().to_string()))
}
