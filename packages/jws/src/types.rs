//! Core type definitions for the signing core

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Public, case-insensitive algorithm identifier such as `HS256`.
///
/// The name is canonicalized to ASCII uppercase on construction, so two names
/// that differ only in case compare equal and hit the same registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlgorithmName(String);

impl AlgorithmName {
    /// Canonicalize a caller-supplied algorithm name
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(name.to_ascii_uppercase())
    }

    /// Canonical (uppercase) form of the name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AlgorithmName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl FromStr for AlgorithmName {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(name))
    }
}

impl AsRef<str> for AlgorithmName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for AlgorithmName {
    fn eq(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for AlgorithmName {
    fn eq(&self, other: &&str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Structural category of a signing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningFamily {
    /// Keyed-hash signing (HMAC)
    SymmetricHash,
    /// Private-key signing through the RSA signature engine
    AsymmetricSignature,
}

impl fmt::Display for SigningFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningFamily::SymmetricHash => f.write_str("symmetric-hash"),
            SigningFamily::AsymmetricSignature => f.write_str("asymmetric-signature"),
        }
    }
}

/// Name of the digest primitive underlying an algorithm, e.g. `SHA256`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherId(&'static str);

impl CipherId {
    /// Wrap a digest name
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Digest name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CipherId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// How a registered algorithm is realized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmSpec {
    family: SigningFamily,
    cipher: CipherId,
}

impl AlgorithmSpec {
    /// Build a spec from its family and digest
    #[must_use]
    pub const fn new(family: SigningFamily, cipher: CipherId) -> Self {
        Self { family, cipher }
    }

    /// Signing family that handles this algorithm
    #[must_use]
    pub const fn family(&self) -> SigningFamily {
        self.family
    }

    /// Digest used by the family routine
    #[must_use]
    pub const fn cipher(&self) -> CipherId {
        self.cipher
    }
}

/// Raw signature bytes returned by [`sign`](crate::sign)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the signature bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take ownership of the signature bytes
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Signature length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the signature is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode the signature with the URL-safe base64 codec
    #[must_use]
    pub fn to_base64_url(&self) -> String {
        crate::api::encoding::base64_url_encode(&self.0)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Signature> for Vec<u8> {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}
