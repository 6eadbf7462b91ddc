use chrono::Utc;
use tracing::info;

use crate::clients::ChatGateway;
use crate::errors::SummaryError;
use crate::views;

/// Post the summary under today's header. The job's only external mutation.
///
/// # Errors
///
/// Propagates the post failure; no local retry.
pub async fn deliver_summary<C: ChatGateway>(
    chat: &C,
    channel_id: &str,
    summary: &str,
) -> Result<(), SummaryError> {
    let text = views::render_summary_post(channel_id, Utc::now().date_naive(), summary);
    chat.post_message(channel_id, &text).await?;
    info!("Summary posted successfully");
    Ok(())
}

/// Post the fixed notice for a channel with nothing to summarise.
///
/// # Errors
///
/// Propagates the post failure; no local retry.
pub async fn post_empty_notice<C: ChatGateway>(
    chat: &C,
    channel_id: &str,
) -> Result<(), SummaryError> {
    let text = views::render_empty_notice(channel_id, Utc::now().date_naive());
    chat.post_message(channel_id, &text).await?;
    info!("Posted 'no messages' notice");
    Ok(())
}
