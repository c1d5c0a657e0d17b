//! Trait definition for secret stores

use std::fmt;

use async_trait::async_trait;

use crate::RemoteError;

/// Raw secret as returned by the store. At most one form is populated.
pub enum SecretPayload {
    /// The secret was stored as a string
    Text(String),
    /// The secret was stored as binary, base64 encoded
    Binary(Vec<u8>),
    /// The response carried no secret at all
    Empty,
}

impl SecretPayload {
    pub fn from_parts(text: Option<String>, binary: Option<Vec<u8>>) -> Self {
        match (text, binary) {
            (Some(text), _) => SecretPayload::Text(text),
            (None, Some(bytes)) => SecretPayload::Binary(bytes),
            (None, None) => SecretPayload::Empty,
        }
    }
}

impl fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretPayload::Text(text) => write!(f, "Text({} bytes)", text.len()),
            SecretPayload::Binary(bytes) => write!(f, "Binary({} bytes)", bytes.len()),
            SecretPayload::Empty => write!(f, "Empty"),
        }
    }
}

/// Trait for secret stores
///
/// Implement this trait to fetch the secret document from a backend other
/// than AWS Secrets Manager, or to stub the backend in tests.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the value of `secret_id` at `version_stage`. Exactly one call to
    /// the backend is made.
    async fn get_secret_value(
        &self,
        secret_id: &str,
        version_stage: &str,
    ) -> Result<SecretPayload, RemoteError>;

    /// Get the store name (for logging)
    fn name(&self) -> &'static str;
}
