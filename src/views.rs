//! Slack mrkdwn rendering for the two terminal posts.

use chrono::NaiveDate;

/// Bolded header naming the channel and the calendar date.
#[must_use]
pub fn summary_header(channel_id: &str, date: NaiveDate) -> String {
    format!(
        "*Stand-up summary for <#{channel_id}> ({}):*",
        date.format("%Y-%m-%d")
    )
}

/// The summary-branch post: header followed by the validated summary text.
#[must_use]
pub fn render_summary_post(channel_id: &str, date: NaiveDate, summary: &str) -> String {
    format!("{}\n{summary}", summary_header(channel_id, date))
}

/// The notice-branch post for a channel with nothing to summarise.
#[must_use]
pub fn render_empty_notice(channel_id: &str, date: NaiveDate) -> String {
    format!(
        "{}\n_There are no stand-up messages to summarise today._",
        summary_header(channel_id, date)
    )
}
