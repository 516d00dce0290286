//! Error taxonomy shared by the registry, the signer and both codecs

use thiserror::Error;

/// Result type for JWS core operations
pub type JwsResult<T> = Result<T, JwsError>;

/// Errors surfaced by the signing core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwsError {
    /// The requested algorithm name is not in the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The cryptographic engine rejected the operation
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// A URL-safe base64 payload could not be decoded
    #[error("Base64 decode failed: {0}")]
    DecodeFailed(String),

    /// JSON parse or serialize failure
    #[error("JSON error: {message}")]
    Json {
        /// Diagnostic text from the underlying JSON library
        message: String,
    },
}

impl JwsError {
    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwsError::UnsupportedAlgorithm(alg.to_string())
    }

    /// Create a signing failure carrying the engine's diagnostic
    #[inline]
    #[must_use]
    pub fn signing_failed(msg: impl Into<String>) -> Self {
        JwsError::SigningFailed(msg.into())
    }

    /// Create a base64 decode error
    #[inline]
    #[must_use]
    pub fn decode_failed(msg: impl Into<String>) -> Self {
        JwsError::DecodeFailed(msg.into())
    }

    /// Create a JSON error
    #[inline]
    #[must_use]
    pub fn json(message: impl Into<String>) -> Self {
        JwsError::Json {
            message: message.into(),
        }
    }

    /// Whether this error names an algorithm the registry does not know.
    ///
    /// Callers typically answer this case with
    /// [`list_supported_algorithms`](crate::list_supported_algorithms).
    #[must_use]
    pub fn is_unsupported_algorithm(&self) -> bool {
        matches!(self, JwsError::UnsupportedAlgorithm(_))
    }
}

impl From<serde_json::Error> for JwsError {
    fn from(err: serde_json::Error) -> Self {
        JwsError::json(err.to_string())
    }
}

impl From<base64::DecodeError> for JwsError {
    fn from(err: base64::DecodeError) -> Self {
        JwsError::decode_failed(err.to_string())
    }
}
