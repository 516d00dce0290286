//! Signing core for compact tokens
//!
//! This crate provides the primitives a token-encoding layer builds on:
//! - An algorithm registry mapping names such as `HS256` or `RS512` to a
//!   signing family and digest
//! - A signing dispatcher producing raw signature bytes
//! - A URL-safe base64 codec
//! - A JSON codec that reports every failure as a typed error
//!
//! All operations are synchronous and safe to call from many threads at once.
//!
//! ```
//! use cryypt_jws::{base64_url_encode, sign};
//!
//! let signature = sign("header.payload", "secret", "HS256")?;
//! let encoded = base64_url_encode(&signature);
//! assert!(!encoded.contains(['+', '/', '=']));
//! # Ok::<(), cryypt_jws::JwsError>(())
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod api;
mod error;
mod types;

pub use algorithms::DEFAULT_ALGORITHM;
pub use api::{
    base64_url_decode, base64_url_encode, json_decode, json_decode_as, json_encode, sign,
    JsonOptions, Jws, SignerBuilder, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT,
};
pub use error::*;
pub use types::*;

/// Whether `name` is a registered algorithm, ignoring case
#[must_use]
pub fn is_algorithm_supported(name: &str) -> bool {
    algorithms::is_supported(name)
}

/// Every registered algorithm name, sorted
#[must_use]
pub fn list_supported_algorithms() -> Vec<AlgorithmName> {
    algorithms::list_supported()
}

/// Family and digest behind a registered algorithm.
///
/// # Errors
/// Returns [`JwsError::UnsupportedAlgorithm`] for unknown names.
pub fn resolve_algorithm(name: &str) -> JwsResult<AlgorithmSpec> {
    algorithms::resolve(name)
}
