//! Payload shape normalization.
//!
//! # Responsibility
//! - Coerce list-shaped resources (bare list or wrapped object) into one
//!   canonical ordered list before any consumer sees them.
//!
//! # Invariants
//! - Normalization never fails; wrong-shaped or missing data is an empty
//!   list so downstream rendering shows an explicit "no data" state.

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Normalizes a payload to an ordered list.
///
/// A bare list is returned unchanged. An object whose `wrapper_key` field is
/// a list yields that field. Anything else yields an empty list.
pub fn to_list(payload: Value, wrapper_key: &str) -> Vec<Value> {
    match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(wrapper_key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Normalizes a payload to a list and decodes each entry into `T`.
///
/// Entries that fail to decode are skipped with a warning; one malformed
/// record must not take the whole collection down.
pub fn decode_list<T: DeserializeOwned>(payload: Value, wrapper_key: &str) -> Vec<T> {
    to_list(payload, wrapper_key)
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<T>(entry) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!("event=decode_skip module=fetch key={wrapper_key} error={err}");
                None
            }
        })
        .collect()
}
