/// Stand-up summariser - a scheduled Slack bot that condenses the last 24 hours
/// of a channel into five bullet points using a hosted language model.
///
/// The crate implements a single Lambda worker:
/// 1. Resolve the Slack bot token from AWS Secrets Manager
/// 2. Fetch the channel history for the last 24 hours (first page, 200 cap)
/// 3. Join and truncate the message text, then call the completion service
/// 4. Post the summary (or a "no messages" notice) back to the channel
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution, triggered by a daily schedule
/// - AWS Secrets Manager for the bot credential
/// - slack-morphism for Slack API interactions
/// - reqwest for the completion-service call
/// - Tokio for async runtime
///
/// Clients are constructed once per process in `main` and passed into the
/// handler, so warm invocations reuse them and tests can substitute mocks.
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod views;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
