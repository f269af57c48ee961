//! Tolerant field decoders for records written by older app versions.
//!
//! Missing or oddly typed fields decode to empty values instead of failing
//! the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text view of a scalar JSON value. Numbers and booleans are stringified.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decodes a stored enum label through its serde representation.
///
/// Only JSON strings are considered; anything else yields `None`.
pub(crate) fn decode_label<T: DeserializeOwned>(value: &Value) -> Option<T> {
    match value {
        Value::String(_) => T::deserialize(value).ok(),
        _ => None,
    }
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value_text(&value).unwrap_or_default())
}

/// A list of names; a single scalar counts as a one-element list.
pub(crate) fn text_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.iter().filter_map(value_text).collect(),
        other => value_text(&other).into_iter().collect(),
    })
}
