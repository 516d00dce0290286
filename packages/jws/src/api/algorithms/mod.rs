//! Signing algorithms
//!
//! `core` holds the dispatcher; each signing family lives in its own module.

mod core;
mod hmac;
mod rsa;

pub use self::core::sign;
