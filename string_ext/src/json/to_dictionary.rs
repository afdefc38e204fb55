// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde_json::Value;

/// A decoded JSON object. Keys are strings and values are the [`Value`] tagged union
/// (null, bool, number, string, array, object).
pub type JsonObject = serde_json::Map<String, Value>;

/// Decode `input` as a JSON object.
///
/// Returns [None] if `input` is not valid JSON, or if it is valid JSON but the top
/// level value is not an object (eg: an array or a number).
///
/// ```
/// use r3bl_string_ext::to_dictionary;
///
/// let it = to_dictionary(r#"{"name": "Ana", "age": 30}"#).unwrap();
/// assert_eq!(it["name"], "Ana");
/// assert_eq!(it["age"], 30);
///
/// assert!(to_dictionary("[1]").is_none());
/// ```
#[must_use]
pub fn to_dictionary(input: &str) -> Option<JsonObject> {
    match serde_json::from_str::<Value>(input) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            tracing::debug!(
                message = "json top level value is not an object",
                kind = value_kind(&other)
            );
            None
        }
        Err(error) => {
            tracing::debug!(message = "malformed json", %error);
            None
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
