//! AWS Secrets Manager client for the bot-token record.

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;

use super::SecretStore;
use crate::errors::SummaryError;

/// Thin wrapper over the Secrets Manager SDK client, built once per process
/// from the shared AWS config.
pub struct SecretsClient {
    client: SecretsManagerClient,
}

impl SecretsClient {
    #[must_use]
    pub fn new(shared_config: &aws_config::SdkConfig) -> Self {
        Self {
            client: SecretsManagerClient::new(shared_config),
        }
    }
}

#[async_trait]
impl SecretStore for SecretsClient {
    async fn fetch_secret(&self, secret_id: &str) -> Result<String, SummaryError> {
        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| SummaryError::AwsError(format!("secretsmanager get_secret_value: {e}")))?;

        resp.secret_string()
            .map(str::to_string)
            .ok_or_else(|| {
                SummaryError::CredentialError("secret has no string payload".to_string())
            })
    }
}
