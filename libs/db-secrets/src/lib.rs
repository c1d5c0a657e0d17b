//! # Database Secrets Library
//!
//! Fetches a database credential bundle from AWS Secrets Manager at service
//! startup and parses it into [`SecretDetails`].
//!
//! ## Flow
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     SecretsClient::fetch                    │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │  1. GetSecretValue(secret_id, AWSCURRENT), once     │   │
//! │  │  2. Failure → log category, return Remote error     │   │
//! │  │  3. SecretString → JSON                             │   │
//! │  │  4. SecretBinary → base64 decode → JSON             │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use db_secrets::{SecretsClient, SecretsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), db_secrets::SecretsError> {
//!     // Secret id from $DB_SECRET_NAME, region from $region
//!     let config = SecretsConfig::from_env("DB_SECRET_NAME");
//!     let details = SecretsClient::new(config).await?.fetch().await?;
//!
//!     println!("connecting to {}:{}", details.host, details.port);
//!     Ok(())
//! }
//! ```

mod config;
mod details;
mod error;
mod provider;

pub mod blocking;
pub mod location;
pub mod providers;

pub use config::{SecretsConfig, DEFAULT_VERSION_STAGE, ENDPOINT_ENV, REGION_ENV};
pub use details::SecretDetails;
pub use error::{RemoteError, RemoteErrorKind, SecretsError};
pub use provider::{SecretPayload, SecretStore};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use providers::AwsSecretsManagerStore;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Fetches and decodes one configured secret
pub struct SecretsClient {
    store: Arc<dyn SecretStore>,
    config: SecretsConfig,
}

impl SecretsClient {
    /// Create a client backed by AWS Secrets Manager in the configured region
    pub async fn new(config: SecretsConfig) -> Result<Self, SecretsError> {
        let store = AwsSecretsManagerStore::new(&config).await?;
        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Create a client over an arbitrary store
    pub fn with_store(store: Arc<dyn SecretStore>, config: SecretsConfig) -> Self {
        Self { store, config }
    }

    /// Configuration this client fetches with
    pub fn config(&self) -> &SecretsConfig {
        &self.config
    }

    /// Fetch the current secret value and parse it.
    ///
    /// A single request is made; nothing is retried or cached.
    pub async fn fetch(&self) -> Result<SecretDetails, SecretsError> {
        let secret_id = self.config.secret_id.as_str();
        let stage = self.config.version_stage.as_str();

        debug!(
            secret_id = %secret_id,
            stage = %stage,
            store = self.store.name(),
            "Fetching secret"
        );

        let payload = match self.store.get_secret_value(secret_id, stage).await {
            Ok(payload) => payload,
            Err(e) => {
                e.kind.log(&e.message);
                return Err(e.into());
            }
        };

        let details = decode_payload(payload, self.config.lenient_json)?;
        debug!(secret_id = %secret_id, "Secret retrieved");
        Ok(details)
    }
}

fn decode_payload(payload: SecretPayload, lenient: bool) -> Result<SecretDetails, SecretsError> {
    let document = match payload {
        SecretPayload::Text(text) => text.into_bytes(),
        SecretPayload::Binary(mut encoded) => {
            // Line breaks from wrapped base64 output are not part of the encoding.
            encoded.retain(|b| !matches!(b, b'\r' | b'\n'));
            STANDARD.decode(&encoded).map_err(|e| {
                error!(error = %e, "Base64 decode of binary secret failed");
                e
            })?
        }
        SecretPayload::Empty if lenient => {
            warn!("Secret response contained no payload, returning empty details");
            return Ok(SecretDetails::default());
        }
        SecretPayload::Empty => return Err(SecretsError::MissingPayload),
    };

    match serde_json::from_slice(&document) {
        Ok(details) => Ok(details),
        Err(e) if lenient => {
            warn!(error = %e, "Secret payload is not valid JSON, returning empty details");
            Ok(SecretDetails::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Build a fresh AWS client and fetch the secret described by `config`
pub async fn fetch_secret_details(config: &SecretsConfig) -> Result<SecretDetails, SecretsError> {
    SecretsClient::new(config.clone()).await?.fetch().await
}

/// Fetch the secret whose id is stored in the environment variable
/// `secret_id_env_var`, using the region in `region`
pub async fn get_secret(secret_id_env_var: &str) -> Result<SecretDetails, SecretsError> {
    fetch_secret_details(&SecretsConfig::from_env(secret_id_env_var)).await
}
