//! JSON Shape Expectations
//!
//! Non-panicking checks over `serde_json` values. Each helper returns a
//! `HarnessError::Assertion` naming the offending key so a failed case
//! reports exactly which part of the contract was broken.

use serde_json::{Map, Value};

use super::error::{HarnessError, HarnessResult};

/// A JSON object body
pub type JsonObject = Map<String, Value>;

/// Require `value` to be a JSON object
pub fn as_object<'a>(value: &'a Value, what: &str) -> HarnessResult<&'a JsonObject> {
    value
        .as_object()
        .ok_or_else(|| HarnessError::assertion(format!("{} is not a JSON object: {}", what, value)))
}

/// Require `key` to be present and boolean
pub fn bool_field(obj: &JsonObject, key: &str) -> HarnessResult<bool> {
    match obj.get(key) {
        None => Err(HarnessError::assertion(format!("'{}' field missing in response", key))),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(HarnessError::assertion(format!(
            "'{}' field is not boolean: {}",
            key, other
        ))),
    }
}

/// Require `success: true`
pub fn expect_success(obj: &JsonObject) -> HarnessResult<()> {
    if bool_field(obj, "success")? {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "Expected success true, got false: {}",
            Value::Object(obj.clone())
        )))
    }
}

/// Require `success: false`
pub fn expect_failure(obj: &JsonObject) -> HarnessResult<()> {
    if bool_field(obj, "success")? {
        Err(HarnessError::assertion("Expected success false, got true"))
    } else {
        Ok(())
    }
}

/// Require `key` to hold a JSON object
pub fn object_field<'a>(obj: &'a JsonObject, key: &str) -> HarnessResult<&'a JsonObject> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| HarnessError::assertion(format!("'{}' object missing or invalid", key)))
}

/// Require `key` to hold a JSON array
pub fn array_field<'a>(obj: &'a JsonObject, key: &str) -> HarnessResult<&'a Vec<Value>> {
    obj.get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| HarnessError::assertion(format!("'{}' field missing or not an array", key)))
}

/// Require `key` to hold a string
pub fn str_field<'a>(obj: &'a JsonObject, key: &str) -> HarnessResult<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| HarnessError::assertion(format!("'{}' missing or not a string", key)))
}

/// Require `key` to hold a string that is not blank
pub fn non_empty_str<'a>(obj: &'a JsonObject, key: &str) -> HarnessResult<&'a str> {
    let value = str_field(obj, key)?;
    if value.trim().is_empty() {
        return Err(HarnessError::assertion(format!("'{}' is empty", key)));
    }
    Ok(value)
}

/// Require `key` to be present, whatever its value
pub fn require_key<'a>(obj: &'a JsonObject, key: &str, what: &str) -> HarnessResult<&'a Value> {
    obj.get(key)
        .ok_or_else(|| HarnessError::assertion(format!("{} missing '{}'", what, key)))
}

/// Require `key` to be absent
pub fn require_absent(obj: &JsonObject, key: &str, what: &str) -> HarnessResult<()> {
    if obj.contains_key(key) {
        return Err(HarnessError::assertion(format!(
            "'{}' should not be returned in {}",
            key, what
        )));
    }
    Ok(())
}

/// Require `key` to equal `expected` exactly
pub fn field_equals(obj: &JsonObject, key: &str, expected: &Value) -> HarnessResult<()> {
    match obj.get(key) {
        Some(actual) if actual == expected => Ok(()),
        actual => Err(HarnessError::assertion(format!(
            "'{}' mismatch: expected {}, got {}",
            key,
            expected,
            actual.map_or_else(|| "nothing".to_string(), Value::to_string)
        ))),
    }
}

/// Require at least one of `keys` to be present
pub fn has_any_key(obj: &JsonObject, keys: &[&str], what: &str) -> HarnessResult<()> {
    if keys.iter().any(|k| obj.contains_key(*k)) {
        return Ok(());
    }
    Err(HarnessError::assertion(format!(
        "{} missing in response (looked for {})",
        what,
        keys.join(", ")
    )))
}
