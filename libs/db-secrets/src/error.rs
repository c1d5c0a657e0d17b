//! Error types for the secrets library

use thiserror::Error;
use tracing::{error, warn};

/// Errors that can occur when fetching database credentials
#[derive(Error, Debug)]
pub enum SecretsError {
    /// The Secrets Manager client could not be built
    #[error("Failed to construct secrets client: {0}")]
    ClientConstruction(String),

    /// The remote call failed. The remote error category is only reported
    /// through logging, never through this value.
    #[error("Secret retrieval failed: {message}")]
    Remote { message: String },

    /// Binary payload was not valid base64
    #[error("Failed to decode binary secret: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Payload was not a valid credential document
    #[error("Failed to parse secret payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried neither a string nor a binary secret
    #[error("Secret response contained no payload")]
    MissingPayload,
}

/// Known failure categories of the `GetSecretValue` operation.
///
/// Used for diagnostics only. Every category propagates to the caller as the
/// same [`SecretsError::Remote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    /// The secret could not be decrypted with its KMS key
    DecryptionFailure,
    /// Server-side failure
    InternalServiceError,
    /// A parameter value was invalid
    InvalidParameter,
    /// A parameter value is not valid for the current state of the resource
    InvalidRequest,
    /// No secret with the given identifier
    ResourceNotFound,
    /// Anything else: transport, credentials, throttling...
    Unclassified,
}

impl RemoteErrorKind {
    /// Error code as reported by the service
    pub fn code(&self) -> &'static str {
        match self {
            RemoteErrorKind::DecryptionFailure => "DecryptionFailure",
            RemoteErrorKind::InternalServiceError => "InternalServiceError",
            RemoteErrorKind::InvalidParameter => "InvalidParameterException",
            RemoteErrorKind::InvalidRequest => "InvalidRequestException",
            RemoteErrorKind::ResourceNotFound => "ResourceNotFoundException",
            RemoteErrorKind::Unclassified => "Unclassified",
        }
    }

    /// Emit the diagnostic line for this category
    pub fn log(&self, message: &str) {
        match self {
            RemoteErrorKind::InternalServiceError => {
                warn!(code = self.code(), error = %message, "Secrets Manager service error")
            }
            RemoteErrorKind::Unclassified => {
                error!(error = %message, "Secrets Manager request failed")
            }
            _ => error!(code = self.code(), error = %message, "Secrets Manager rejected request"),
        }
    }
}

/// Failure reported by a [`SecretStore`](crate::SecretStore)
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<RemoteError> for SecretsError {
    fn from(err: RemoteError) -> Self {
        SecretsError::Remote {
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_service_names() {
        assert_eq!(RemoteErrorKind::DecryptionFailure.code(), "DecryptionFailure");
        assert_eq!(
            RemoteErrorKind::ResourceNotFound.code(),
            "ResourceNotFoundException"
        );
        assert_eq!(
            RemoteErrorKind::InvalidParameter.code(),
            "InvalidParameterException"
        );
    }

    #[test]
    fn test_remote_error_drops_kind_on_conversion() {
        let remote = RemoteError::new(RemoteErrorKind::ResourceNotFound, "no such secret");
        let err: SecretsError = remote.into();

        match err {
            SecretsError::Remote { message } => assert_eq!(message, "no such secret"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
