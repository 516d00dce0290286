//! JSON codec with typed failures
//!
//! Wraps `serde_json` so that every parse or serialize failure, depth
//! violation included, comes back as [`JwsError::Json`] carrying the
//! underlying diagnostic.

mod depth;
mod options;
mod preflight;

pub use options::{JsonOptions, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};

use crate::error::{JwsError, JwsResult};
use preflight::Preflight;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Parse JSON text into a [`Value`].
///
/// Integers that fit neither `i64` nor `u64` become strings holding their
/// exact digits when [`JsonOptions::preserve_big_integers_as_text`] is set,
/// and `f64` numbers otherwise. Floats are always read as `f64`.
///
/// # Errors
/// Returns [`JwsError::Json`] on syntax errors, malformed UTF-8, trailing
/// data, numbers outside the `f64` range, nesting deeper than
/// [`JsonOptions::max_depth`], or a `max_depth` outside
/// `1..=`[`MAX_DEPTH_LIMIT`].
pub fn json_decode(text: impl AsRef<[u8]>, options: &JsonOptions) -> JwsResult<Value> {
    options.validate()?;
    let text = text.as_ref();

    let depth = depth::text_depth(text, options.max_depth);
    if depth > options.max_depth {
        tracing::debug!(
            max_depth = options.max_depth,
            "rejected JSON input nested past the limit"
        );
        return Err(options.depth_exceeded());
    }

    // Depth is already bounded by the scan above
    let mut deserializer = serde_json::Deserializer::from_slice(text);
    deserializer.disable_recursion_limit();
    let mut value = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;

    normalize_numbers(&mut value, options, Direction::Decode)?;
    Ok(value)
}

/// Parse JSON text and map it into `T`.
///
/// Big integers follow the same rule as [`json_decode`], so with the default
/// options a field receiving one must accept a string.
///
/// # Errors
/// Returns [`JwsError::Json`] if parsing fails or the value does not fit `T`.
pub fn json_decode_as<T: DeserializeOwned>(
    text: impl AsRef<[u8]>,
    options: &JsonOptions,
) -> JwsResult<T> {
    let value = json_decode(text, options)?;
    Ok(serde_json::from_value(value)?)
}

/// Serialize a value to compact JSON text.
///
/// When big integers are not preserved, integers outside the 64-bit ranges
/// are written as `f64`.
///
/// # Errors
/// Returns [`JwsError::Json`] for non-finite floats, map keys `serde_json`
/// cannot turn into strings, errors raised by the value's `Serialize`
/// implementation, or nesting deeper than [`JsonOptions::max_depth`].
pub fn json_encode<T>(value: &T, options: &JsonOptions) -> JwsResult<String>
where
    T: Serialize + ?Sized,
{
    options.validate()?;
    Preflight::check(value, options.max_depth).map_err(|e| JwsError::json(e.0))?;

    let mut value = serde_json::to_value(value)?;
    normalize_numbers(&mut value, options, Direction::Encode)?;
    Ok(serde_json::to_string(&value)?)
}

#[derive(Clone, Copy)]
enum Direction {
    Decode,
    Encode,
}

fn normalize_numbers(
    value: &mut Value,
    options: &JsonOptions,
    direction: Direction,
) -> JwsResult<()> {
    match value {
        Value::Array(items) => items
            .iter_mut()
            .try_for_each(|item| normalize_numbers(item, options, direction)),
        Value::Object(map) => map
            .values_mut()
            .try_for_each(|item| normalize_numbers(item, options, direction)),
        Value::Number(number) => {
            if let Some(replacement) = normalize_number(number, options, direction)? {
                *value = replacement;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Replacement for a number whose representation depends on the options
fn normalize_number(
    number: &Number,
    options: &JsonOptions,
    direction: Direction,
) -> JwsResult<Option<Value>> {
    if let Some(int) = number.as_i64() {
        return Ok(Some(Value::Number(int.into())));
    }
    if let Some(uint) = number.as_u64() {
        return Ok(Some(Value::Number(uint.into())));
    }

    let text = number.to_string();
    let is_integer = !text.contains(['.', 'e', 'E']);

    if is_integer && options.preserve_big_integers_as_text {
        return Ok(match direction {
            Direction::Decode => Some(Value::String(text)),
            Direction::Encode => None,
        });
    }

    text.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(|float| Some(Value::Number(float)))
        .ok_or_else(|| JwsError::json(format!("number out of range: {text}")))
}
