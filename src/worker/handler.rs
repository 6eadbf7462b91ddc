use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::run_summary_job;
use crate::clients::slack_client::SlackClient;
use crate::clients::{CompletionGateway, SecretStore};
use crate::core::config::AppConfig;
use crate::core::models::{BotCredentials, JobOutcome};

/// Lambda handler for the daily summary job.
///
/// The scheduled-event payload carries nothing the job needs, so it is
/// ignored. Clients passed in from `main` are reused across warm invocations;
/// the Slack client is rebuilt each run from the freshly resolved token.
///
/// Any failure propagates so the scheduler sees a failed invocation; only the
/// notice branch converts an empty channel into a success.
///
/// # Errors
///
/// Returns the first credential, Slack, or model error encountered.
pub async fn function_handler<S, L>(
    event: LambdaEvent<Value>,
    config: &AppConfig,
    secrets: &S,
    llm: &L,
) -> Result<Value, Error>
where
    S: SecretStore,
    L: CompletionGateway,
{
    info!("Summary job invoked (request id {})", event.context.request_id);

    let raw_secret = secrets
        .fetch_secret(&config.slack_token_secret_arn)
        .await
        .inspect_err(|e| error!("Unable to retrieve Slack token: {}", e))?;
    let credentials = BotCredentials::from_secret_json(&raw_secret)?;

    let slack = SlackClient::new(credentials.bot_token);

    let outcome = run_summary_job(&slack, llm, &config.channel_id)
        .await
        .inspect_err(|e| error!("Summary job failed: {}", e))?;

    Ok(match outcome {
        JobOutcome::SummaryPosted => json!({
            "statusCode": 200,
            "body": json!({ "message": outcome.body() }).to_string(),
        }),
        JobOutcome::NoticePosted => json!({
            "statusCode": 200,
            "body": outcome.body(),
        }),
    })
}
