use serde::Deserialize;

use crate::errors::SummaryError;

/// One record from the channel history. Only the text field is consumed;
/// system and file-share events carry none.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelMessage {
    pub text: Option<String>,
}

/// Bot credential record stored in Secrets Manager.
#[derive(Debug, Clone, Deserialize)]
pub struct BotCredentials {
    #[serde(rename = "SLACK_BOT_TOKEN")]
    pub bot_token: String,
}

impl BotCredentials {
    /// Parse the secret's JSON payload and extract the bot token.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the payload is not JSON or the
    /// `SLACK_BOT_TOKEN` field is missing.
    pub fn from_secret_json(raw: &str) -> Result<Self, SummaryError> {
        serde_json::from_str(raw)
            .map_err(|e| SummaryError::CredentialError(format!("secret payload parse: {e}")))
    }
}

/// Which terminal branch a successful invocation took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    SummaryPosted,
    NoticePosted,
}

impl JobOutcome {
    /// Short machine-readable body reported to the invoking scheduler.
    #[must_use]
    pub fn body(self) -> &'static str {
        match self {
            JobOutcome::SummaryPosted => "Summary posted",
            JobOutcome::NoticePosted => "Posted 'no messages' notice.",
        }
    }
}
