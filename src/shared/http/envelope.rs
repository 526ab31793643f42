// src/shared/http/envelope.rs
//
// The portfolio API is not consistent about how it wraps payloads: some
// endpoints return a bare array, others `{ "projects": [...] }`, others
// `{ "success": true, "data": {...} }`. These helpers accept all of them.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use super::error::GatewayError;

/// Fields the API puts around a payload rather than inside it.
const ENVELOPE_FIELDS: [&str; 4] = ["success", "message", "error", "status"];

/// Returns the value under the first present, non-null key, or the body itself.
pub fn unwrap_envelope(body: Value, keys: &[&str]) -> Value {
    if let Value::Object(mut map) = body {
        for key in keys {
            match map.remove(*key) {
                Some(Value::Null) | None => continue,
                Some(inner) => return inner,
            }
        }
        return Value::Object(map);
    }
    body
}

/// Decodes a collection. A body without any of the keys yields an empty list.
pub fn decode_list<T: DeserializeOwned>(body: Value, keys: &[&str]) -> Result<Vec<T>, GatewayError> {
    match unwrap_envelope(body, keys) {
        Value::Array(items) => serde_json::from_value(Value::Array(items))
            .map_err(|e| GatewayError::Decode(e.to_string())),
        Value::Null => Ok(Vec::new()),
        Value::Object(_) => {
            warn!("API response carried none of the list keys {:?}", keys);
            Ok(Vec::new())
        }
        other => Err(GatewayError::Decode(format!(
            "expected a list, got {}",
            kind_of(&other)
        ))),
    }
}

/// Decodes a single record echoed back by a write endpoint.
///
/// Write endpoints sometimes answer with nothing useful; that is `None`, not an
/// error, because the write itself already succeeded.
pub fn decode_echo<T: DeserializeOwned>(body: Value, keys: &[&str]) -> Option<T> {
    match unwrap_envelope(body, keys) {
        Value::Null => None,
        inner if is_acknowledgement(&inner) => None,
        inner => match serde_json::from_value(inner) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!("Could not decode echoed record: {}", e);
                None
            }
        },
    }
}

/// An object holding nothing but envelope fields, e.g. `{ "success": true }`.
fn is_acknowledgement(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.keys().all(|key| ENVELOPE_FIELDS.contains(&key.as_str())),
        _ => false,
    }
}

/// Decodes a single record that must be present.
pub fn decode_item<T: DeserializeOwned>(body: Value, keys: &[&str]) -> Result<T, GatewayError> {
    serde_json::from_value(unwrap_envelope(body, keys))
        .map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Rejects `{ "success": false, "message": ... }` bodies that arrive with a 2xx status.
pub fn ensure_acknowledged(body: &Value, status: u16) -> Result<(), GatewayError> {
    match body.get("success") {
        Some(Value::Bool(false)) => Err(GatewayError::Status {
            status,
            message: message_of(body).unwrap_or_default(),
        }),
        _ => Ok(()),
    }
}

/// The `message` (or `error`) field of an API body, when it is a string.
pub fn message_of(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
