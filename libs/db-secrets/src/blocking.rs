//! Synchronous entry points for callers without an async runtime.
//!
//! Each call drives the async fetch on its own current-thread runtime. Calling
//! these from inside a tokio runtime panics; use the async functions there.

use tokio::runtime::{Builder, Runtime};

use crate::{SecretDetails, SecretsConfig, SecretsError};

fn runtime() -> Result<Runtime, SecretsError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SecretsError::ClientConstruction(format!("failed to start runtime: {e}")))
}

/// Blocking form of [`crate::fetch_secret_details`]
pub fn fetch_secret_details(config: &SecretsConfig) -> Result<SecretDetails, SecretsError> {
    runtime()?.block_on(crate::fetch_secret_details(config))
}

/// Blocking form of [`crate::get_secret`]
pub fn get_secret(secret_id_env_var: &str) -> Result<SecretDetails, SecretsError> {
    runtime()?.block_on(crate::get_secret(secret_id_env_var))
}
