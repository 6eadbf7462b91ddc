// Lambda bootstrap entry point for the daily summary job.

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use serde_json::Value;
use tracing::error;

use standup_summariser::clients::llm_client::LlmClient;
use standup_summariser::clients::secrets_client::SecretsClient;
use standup_summariser::core::config::AppConfig;
use standup_summariser::errors::SummaryError;
use standup_summariser::worker::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    standup_summariser::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(SummaryError::ConfigError(e))
    })?;

    // Constructed once per process and reused across warm invocations.
    let shared_config = aws_config::from_env().load().await;
    let secrets = SecretsClient::new(&shared_config);
    let llm = LlmClient::new(&config);

    run(service_fn(|event: LambdaEvent<Value>| {
        function_handler(event, &config, &secrets, &llm)
    }))
    .await
}
