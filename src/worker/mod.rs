//! The summary job: collect, summarize, deliver.

pub mod deliver;
pub mod handler;
pub mod summarize;

use crate::clients::{ChatGateway, CompletionGateway};
use crate::core::models::JobOutcome;
use crate::errors::SummaryError;

use self::summarize::SummarizeResult;

/// History lower bound: now minus 24 hours, in whole seconds.
pub const HISTORY_WINDOW_SECS: i64 = 24 * 3600;

/// Page size cap for the single history request. No follow-up pagination is
/// performed even when the window holds more messages.
pub const HISTORY_PAGE_LIMIT: u16 = 200;

/// Run the whole job against the given gateways: fetch and summarize the last
/// 24 hours of `channel_id`, then post the matching terminal message.
///
/// Exactly one message is posted per successful run; repeated runs post
/// repeated messages. Every failure aborts the remaining steps and propagates.
///
/// # Errors
///
/// Returns the first gateway or validation error encountered; nothing is
/// posted after a failure.
pub async fn run_summary_job<C, L>(
    chat: &C,
    llm: &L,
    channel_id: &str,
) -> Result<JobOutcome, SummaryError>
where
    C: ChatGateway,
    L: CompletionGateway,
{
    match summarize::summarize_channel(chat, llm, channel_id).await? {
        SummarizeResult::Summary(summary) => {
            deliver::deliver_summary(chat, channel_id, &summary).await?;
            Ok(JobOutcome::SummaryPosted)
        }
        SummarizeResult::NoMessages => {
            deliver::post_empty_notice(chat, channel_id).await?;
            Ok(JobOutcome::NoticePosted)
        }
    }
}
