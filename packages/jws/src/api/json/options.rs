//! JSON codec configuration

use crate::error::{JwsError, JwsResult};
use serde::{Deserialize, Serialize};

/// Default maximum container nesting accepted by the JSON codec
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Largest `max_depth` the codec accepts.
///
/// Decoding, number normalization and the encode walk all recurse once per
/// nesting level, so the depth must stay bounded to keep the call stack
/// bounded.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Options shared by [`json_decode`](crate::json_decode) and
/// [`json_encode`](crate::json_encode).
///
/// Deserializable so embedders can read it from their own configuration;
/// missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    /// Maximum nesting of arrays and objects; scalars sit at depth 0.
    /// Must lie in `1..=MAX_DEPTH_LIMIT`.
    pub max_depth: usize,
    /// Keep integers outside the 64-bit ranges exact instead of converting
    /// them to `f64`. Decoding turns them into strings holding their digits.
    pub preserve_big_integers_as_text: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            preserve_big_integers_as_text: true,
        }
    }
}

impl JsonOptions {
    /// Options with the default depth limit and big integers preserved
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Choose whether big integers are preserved exactly
    #[must_use]
    pub fn with_big_integers_as_text(mut self, preserve: bool) -> Self {
        self.preserve_big_integers_as_text = preserve;
        self
    }

    pub(crate) fn validate(&self) -> JwsResult<()> {
        if self.max_depth == 0 {
            return Err(JwsError::json("maximum depth must be greater than zero"));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(JwsError::json(format!(
                "maximum depth {} is above the limit of {MAX_DEPTH_LIMIT}",
                self.max_depth
            )));
        }
        Ok(())
    }

    pub(crate) fn depth_exceeded(&self) -> JwsError {
        JwsError::json(format!(
            "maximum nesting depth of {} exceeded",
            self.max_depth
        ))
    }
}
