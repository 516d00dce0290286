//! Signing dispatcher: resolves an algorithm name and routes to its family

use crate::algorithms::resolve;
use crate::error::JwsResult;
use crate::types::{Signature, SigningFamily};

/// Sign `message` with `key` using the named algorithm.
///
/// The name is case-insensitive. `key` is the raw HMAC secret for the `HS*`
/// algorithms and an RSA private key (PEM or DER, PKCS#8 or PKCS#1) for the
/// `RS*` algorithms. Empty messages and empty keys are not rejected here.
///
/// # Errors
/// - [`JwsError::UnsupportedAlgorithm`](crate::JwsError::UnsupportedAlgorithm)
///   if the name is not registered; nothing is signed in that case
/// - [`JwsError::SigningFailed`](crate::JwsError::SigningFailed) if the
///   signature engine rejects the key
pub fn sign(
    message: impl AsRef<[u8]>,
    key: impl AsRef<[u8]>,
    algorithm: &str,
) -> JwsResult<Signature> {
    let spec = resolve(algorithm)?;
    let (message, key) = (message.as_ref(), key.as_ref());

    tracing::trace!(
        algorithm,
        family = %spec.family(),
        cipher = %spec.cipher(),
        message_len = message.len(),
        "dispatching signature"
    );

    let bytes = match spec.family() {
        SigningFamily::SymmetricHash => super::hmac::sign(message, key, spec.cipher())?,
        SigningFamily::AsymmetricSignature => super::rsa::sign(message, key, spec.cipher())?,
    };

    Ok(Signature::new(bytes))
}
