//! HMAC signing for the symmetric-hash family (HS256, HS384, HS512)

use crate::error::{JwsError, JwsResult};
use crate::types::CipherId;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Keyed-hash digest of `message` under `secret` using the digest named by `cipher`.
///
/// HMAC accepts keys of any length, including empty ones.
pub(crate) fn sign(message: &[u8], secret: &[u8], cipher: CipherId) -> JwsResult<Vec<u8>> {
    match cipher.as_str() {
        "SHA256" => keyed_digest::<HmacSha256>(message, secret),
        "SHA384" => keyed_digest::<HmacSha384>(message, secret),
        "SHA512" => keyed_digest::<HmacSha512>(message, secret),
        other => Err(JwsError::signing_failed(format!(
            "no keyed-hash routine for digest {other}"
        ))),
    }
}

#[inline]
fn keyed_digest<M: Mac + KeyInit>(message: &[u8], secret: &[u8]) -> JwsResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| JwsError::signing_failed(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
