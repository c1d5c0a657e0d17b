//! Configuration for credential retrieval

/// Environment variable holding the AWS region
pub const REGION_ENV: &str = "region";
/// Optional endpoint override (e.g. a local emulator)
pub const ENDPOINT_ENV: &str = "SECRETS_MANAGER_ENDPOINT";
/// Version stage that always resolves to the active secret version
pub const DEFAULT_VERSION_STAGE: &str = "AWSCURRENT";

/// Everything needed to fetch one secret
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Secret name or ARN in Secrets Manager
    pub secret_id: String,
    /// AWS region hosting the secret
    pub region: String,
    /// Version stage to request
    pub version_stage: String,
    /// Custom Secrets Manager endpoint
    pub endpoint_url: Option<String>,
    /// Return a zero-valued record instead of an error on malformed JSON
    pub lenient_json: bool,
}

impl SecretsConfig {
    pub fn new(secret_id: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            region: region.into(),
            version_stage: DEFAULT_VERSION_STAGE.to_string(),
            endpoint_url: None,
            lenient_json: false,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// The secret id is read from the variable named `secret_id_env_var`, the
    /// region from `region`. Unset variables yield empty strings; nothing is
    /// validated here.
    pub fn from_env(secret_id_env_var: &str) -> Self {
        let secret_id = std::env::var(secret_id_env_var).unwrap_or_default();
        let region = std::env::var(REGION_ENV).unwrap_or_default();
        let endpoint_url = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            endpoint_url,
            ..Self::new(secret_id, region)
        }
    }

    pub fn with_version_stage(mut self, stage: impl Into<String>) -> Self {
        self.version_stage = stage.into();
        self
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_lenient_json(mut self, lenient: bool) -> Self {
        self.lenient_json = lenient;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pins_current_stage() {
        let config = SecretsConfig::new("prod/db", "eu-west-1");

        assert_eq!(config.secret_id, "prod/db");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.version_stage, "AWSCURRENT");
        assert!(config.endpoint_url.is_none());
        assert!(!config.lenient_json);
    }

    #[test]
    fn test_from_env_reads_named_variable() {
        std::env::set_var("TEST_CONFIG_DB_SECRET", "orders/db");

        let config = SecretsConfig::from_env("TEST_CONFIG_DB_SECRET");
        assert_eq!(config.secret_id, "orders/db");
        assert_eq!(config.version_stage, DEFAULT_VERSION_STAGE);

        std::env::remove_var("TEST_CONFIG_DB_SECRET");
    }

    #[test]
    fn test_from_env_missing_variable_is_empty() {
        let config = SecretsConfig::from_env("TEST_CONFIG_UNSET_SECRET_12345");

        assert_eq!(config.secret_id, "");
    }

    #[test]
    fn test_builders() {
        let config = SecretsConfig::new("a", "us-east-1")
            .with_version_stage("AWSPREVIOUS")
            .with_endpoint_url("http://localhost:4566")
            .with_lenient_json(true);

        assert_eq!(config.version_stage, "AWSPREVIOUS");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert!(config.lenient_json);
    }
}
