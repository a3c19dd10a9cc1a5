//! Request parameter validation
//!
//! Strict, type-checked extraction from the untyped `params` value. Every
//! failure is the single validation error kind
//! ([`Error::InvalidMethodCall`]); the dispatcher turns it into the
//! `"invalid method call"` reply. Fields that are genuinely optional are
//! read with [`optional_str`]/[`optional_i64`] instead of validated.

use serde_json::Value;
use tonearm_common::{Error, Result};

/// Extracts a required integer field.
pub fn require_i64(params: &Value, key: &str) -> Result<i64> {
    params
        .get(key)
        .and_then(Value::as_i64)
        .ok_or(Error::InvalidMethodCall)
}

/// Extracts a required string field.
pub fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or(Error::InvalidMethodCall)
}

/// Extracts a required array of integers.
///
/// Validated element-wise: a single non-integer element fails the whole
/// call, so no partial index list ever reaches a collaborator.
pub fn require_id_array(params: &Value, key: &str) -> Result<Vec<i64>> {
    let items = params
        .get(key)
        .and_then(Value::as_array)
        .ok_or(Error::InvalidMethodCall)?;

    items
        .iter()
        .map(|item| item.as_i64().ok_or(Error::InvalidMethodCall))
        .collect()
}

/// Reads an optional string field, defaulting to the empty string.
pub fn optional_str(params: &Value, key: &str) -> String {
    params
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Reads an optional integer field, defaulting to zero.
pub fn optional_i64(params: &Value, key: &str) -> i64 {
    params.get(key).and_then(Value::as_i64).unwrap_or_default()
}
