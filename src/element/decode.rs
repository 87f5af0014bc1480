//! Best-effort decoding of serialized sub-documents.
//!
//! Kibana stores several fields as JSON text inside the saved object. They are
//! recognised by name only, never by sniffing content.

use serde_json::{Map, Value};

/// Field names whose string content is itself a JSON document.
pub const SERIALIZED_FIELDS: &[&str] = &[
    "fieldFormatMap",
    "optionsJSON",
    "panelsJSON",
    "searchSourceJSON",
    "uiStateJSON",
    "visState",
];

pub fn is_serialized_field(name: &str) -> bool {
    SERIALIZED_FIELDS.contains(&name)
}

/// Outcome of one field decode attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDecode {
    Decoded(Value),
    /// Left untouched: already structured, malformed, or a bare scalar.
    Kept,
}

/// Decode a single serialized field value.
///
/// Only text that parses to an object or array is accepted, so a decoded
/// value is never text again and a second pass keeps it.
pub fn decode_field(name: &str, value: &Value) -> FieldDecode {
    let Value::String(text) = value else {
        return FieldDecode::Kept;
    };
    match serde_json::from_str::<Value>(text) {
        Ok(decoded @ (Value::Object(_) | Value::Array(_))) => FieldDecode::Decoded(decoded),
        Ok(_) => FieldDecode::Kept,
        Err(err) => {
            tracing::warn!(field = name, error = %err, "keeping malformed serialized field as text");
            FieldDecode::Kept
        }
    }
}

/// Decode every known serialized field in `map`, descending into nested
/// plain mappings and arrays. Freshly decoded content is not descended into.
pub fn decode_map(map: &mut Map<String, Value>) {
    for (name, value) in map.iter_mut() {
        if is_serialized_field(name) {
            if let FieldDecode::Decoded(decoded) = decode_field(name, value) {
                *value = decoded;
            }
            continue;
        }
        decode_nested(value);
    }
}

fn decode_nested(value: &mut Value) {
    match value {
        Value::Object(map) => decode_map(map),
        Value::Array(items) => items.iter_mut().for_each(decode_nested),
        _ => {}
    }
}
