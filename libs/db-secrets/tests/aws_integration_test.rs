//! Integration tests against a real AWS Secrets Manager
//!
//! These tests need AWS credentials from the default provider chain and an
//! existing secret holding a database credential document.
//!
//! Prerequisites:
//! 1. `region` set to the secret's region
//! 2. `DB_SECRET_NAME` set to the secret name or ARN
//! 3. Optional: `SECRETS_MANAGER_ENDPOINT` for a local emulator

use db_secrets::{SecretsClient, SecretsConfig, SecretsError};
use tracing_subscriber::EnvFilter;

const SECRET_ENV: &str = "DB_SECRET_NAME";

/// Helper to check if AWS is configured in the environment
fn is_aws_configured() -> bool {
    std::env::var(SECRET_ENV).is_ok() && std::env::var("region").is_ok()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test that the configured secret is fetched and parsed
#[tokio::test]
async fn test_fetch_configured_secret() {
    if !is_aws_configured() {
        eprintln!("Skipping AWS test - {SECRET_ENV} and region environment variables not set.");
        return;
    }
    init_tracing();

    let details = db_secrets::get_secret(SECRET_ENV)
        .await
        .expect("Should fetch configured secret");

    assert!(!details.host.is_empty(), "host should be populated");
    assert!(details.port > 0, "port should be populated");
}

/// Test that an unknown secret surfaces a remote error
#[tokio::test]
async fn test_unknown_secret_is_remote_error() {
    if !is_aws_configured() {
        eprintln!("Skipping AWS test - {SECRET_ENV} and region environment variables not set.");
        return;
    }
    init_tracing();

    let region = std::env::var("region").unwrap();
    let mut config = SecretsConfig::new("db-secrets/does-not-exist-xxxxx", region);
    if let Ok(endpoint) = std::env::var(db_secrets::ENDPOINT_ENV) {
        config = config.with_endpoint_url(endpoint);
    }

    let result = SecretsClient::new(config)
        .await
        .expect("client should build")
        .fetch()
        .await;

    assert!(matches!(result, Err(SecretsError::Remote { .. })));
}

/// Test the blocking entry point outside any runtime
#[test]
fn test_blocking_fetch() {
    if !is_aws_configured() {
        eprintln!("Skipping AWS test - {SECRET_ENV} and region environment variables not set.");
        return;
    }
    init_tracing();

    let details = db_secrets::blocking::get_secret(SECRET_ENV).expect("Should fetch configured secret");

    assert!(!details.host.is_empty());
}
