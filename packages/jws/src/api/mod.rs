//! Public operations of the signing core
//!
//! - `algorithms`: signing dispatcher and the per-family routines
//! - `encoding`: URL-safe base64 codec
//! - `json`: JSON codec with typed failures
//! - `builder`: signer builder carrying the library defaults

pub mod algorithms;
pub mod builder;
pub mod encoding;
pub mod json;

pub use algorithms::sign;
pub use builder::{Jws, SignerBuilder};
pub use encoding::{base64_url_decode, base64_url_encode};
pub use json::{json_decode, json_decode_as, json_encode, JsonOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
