//! Algorithm registry: which algorithm names exist and how each is realized

use crate::error::{JwsError, JwsResult};
use crate::types::{AlgorithmName, AlgorithmSpec, CipherId, SigningFamily};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Algorithm used by the token layer when a caller does not choose one
pub const DEFAULT_ALGORITHM: &str = "HS256";

const SUPPORTED: [(&str, SigningFamily, &str); 6] = [
    ("HS256", SigningFamily::SymmetricHash, "SHA256"),
    ("HS384", SigningFamily::SymmetricHash, "SHA384"),
    ("HS512", SigningFamily::SymmetricHash, "SHA512"),
    ("RS256", SigningFamily::AsymmetricSignature, "SHA256"),
    ("RS384", SigningFamily::AsymmetricSignature, "SHA384"),
    ("RS512", SigningFamily::AsymmetricSignature, "SHA512"),
];

// Keys are canonical uppercase names.
static REGISTRY: Lazy<HashMap<&'static str, AlgorithmSpec>> = Lazy::new(|| {
    SUPPORTED
        .iter()
        .map(|&(name, family, cipher)| {
            (name, AlgorithmSpec::new(family, CipherId::new(cipher)))
        })
        .collect()
});

/// Case-insensitive membership test against the registry
#[must_use]
pub fn is_supported(name: &str) -> bool {
    REGISTRY.contains_key(AlgorithmName::new(name).as_str())
}

/// Every registered algorithm name, sorted
#[must_use]
pub fn list_supported() -> Vec<AlgorithmName> {
    let mut names: Vec<AlgorithmName> = REGISTRY.keys().copied().map(AlgorithmName::new).collect();
    names.sort();
    names
}

/// Look up how an algorithm is realized.
///
/// # Errors
/// Returns [`JwsError::UnsupportedAlgorithm`] when the case-folded name is not
/// registered.
pub fn resolve(name: &str) -> JwsResult<AlgorithmSpec> {
    let canonical = AlgorithmName::new(name);
    REGISTRY
        .get(canonical.as_str())
        .copied()
        .ok_or_else(|| JwsError::unsupported_algorithm(name))
}
