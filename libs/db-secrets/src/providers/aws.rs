//! AWS Secrets Manager store
//!
//! Credentials come from the default AWS provider chain.
//! See: https://docs.aws.amazon.com/secretsmanager/latest/apireference/API_GetSecretValue.html

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_sdk_secretsmanager::Client;
use tracing::debug;

use crate::{RemoteError, RemoteErrorKind, SecretPayload, SecretStore, SecretsConfig, SecretsError};

/// Secret store backed by AWS Secrets Manager
pub struct AwsSecretsManagerStore {
    client: Client,
}

impl AwsSecretsManagerStore {
    /// Build a client bound to the configured region
    pub async fn new(config: &SecretsConfig) -> Result<Self, SecretsError> {
        if config.region.trim().is_empty() {
            return Err(SecretsError::ClientConstruction(
                "region is not set".to_string(),
            ));
        }

        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_secretsmanager::config::Builder::from(&shared_config);
        if let Some(endpoint) = config.endpoint_url.as_deref() {
            builder = builder.endpoint_url(endpoint);
        }

        debug!(region = %config.region, endpoint = ?config.endpoint_url, "Secrets Manager client created");

        Ok(Self::from_client(Client::from_conf(builder.build())))
    }

    /// Wrap an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn classify(err: &GetSecretValueError) -> RemoteErrorKind {
    match err {
        GetSecretValueError::DecryptionFailure(_) => RemoteErrorKind::DecryptionFailure,
        GetSecretValueError::InternalServiceError(_) => RemoteErrorKind::InternalServiceError,
        GetSecretValueError::InvalidParameterException(_) => RemoteErrorKind::InvalidParameter,
        GetSecretValueError::InvalidRequestException(_) => RemoteErrorKind::InvalidRequest,
        GetSecretValueError::ResourceNotFoundException(_) => RemoteErrorKind::ResourceNotFound,
        _ => RemoteErrorKind::Unclassified,
    }
}

#[async_trait]
impl SecretStore for AwsSecretsManagerStore {
    async fn get_secret_value(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<SecretPayload, RemoteError> {
        let response = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .version_stage(version_stage)
            .send()
            .await;

        match response {
            Ok(output) => Ok(SecretPayload::from_parts(
                output.secret_string().map(str::to_owned),
                output.secret_binary().map(|blob| blob.as_ref().to_vec()),
            )),
            Err(err) => {
                let kind = err
                    .as_service_error()
                    .map(classify)
                    .unwrap_or(RemoteErrorKind::Unclassified);
                Err(RemoteError::new(kind, DisplayErrorContext(&err).to_string()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "aws-secretsmanager"
    }
}
