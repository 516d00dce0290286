//! Signer builder - entry point for callers that want the library defaults

use crate::algorithms::DEFAULT_ALGORITHM;
use crate::error::JwsResult;
use crate::types::{AlgorithmName, Signature};
use zeroize::Zeroizing;

/// Direct builder entry point
pub struct Jws;

impl Jws {
    /// Start configuring a signer
    #[inline]
    #[must_use]
    pub fn signer() -> SignerBuilder {
        SignerBuilder::new()
    }
}

/// Reusable signer configuration.
///
/// Signs with [`DEFAULT_ALGORITHM`] unless another algorithm is chosen. The
/// key is wiped from memory when the builder is dropped.
#[derive(Clone)]
pub struct SignerBuilder {
    algorithm: Option<String>,
    key: Zeroizing<Vec<u8>>,
}

impl SignerBuilder {
    /// Signer with the default algorithm and an empty key
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: None,
            key: Zeroizing::new(Vec::new()),
        }
    }

    /// Choose the algorithm (case-insensitive)
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_owned());
        self
    }

    /// Set the HMAC secret or RSA private key
    #[inline]
    #[must_use]
    pub fn with_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = Zeroizing::new(key.into());
        self
    }

    /// Algorithm this signer will use, in canonical form
    #[must_use]
    pub fn algorithm(&self) -> AlgorithmName {
        AlgorithmName::new(self.requested_algorithm())
    }

    fn requested_algorithm(&self) -> &str {
        self.algorithm.as_deref().unwrap_or(DEFAULT_ALGORITHM)
    }

    /// Sign `message` with the configured key and algorithm.
    ///
    /// # Errors
    /// Same as [`sign`](crate::sign).
    pub fn sign(&self, message: impl AsRef<[u8]>) -> JwsResult<Signature> {
        super::algorithms::sign(message, self.key.as_slice(), self.requested_algorithm())
    }
}

impl Default for SignerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SignerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignerBuilder")
            .field("algorithm", &self.algorithm())
            .field("key", &"<redacted>")
            .finish()
    }
}
