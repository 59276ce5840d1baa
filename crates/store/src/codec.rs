//! Lenient collection decoding.
//!
//! Persisted collections are decoded element by element so that one
//! malformed record is dropped deterministically instead of poisoning
//! the whole collection. A value that is not a JSON array at all decodes
//! as empty; storage read problems are never fatal.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Decode a stored JSON array, dropping malformed elements.
pub fn decode_collection<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!(key, error = %e, "Malformed collection, starting empty");
            return Vec::new();
        }
    };

    let total = values.len();
    let decoded: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(key, index, error = %e, "Dropping malformed record");
                None
            }
        })
        .collect();

    if decoded.len() < total {
        tracing::debug!(key, kept = decoded.len(), total, "Collection loaded with drops");
    }
    decoded
}

/// Serialize a collection for storage as one JSON array value.
pub fn encode_collection<T: Serialize>(records: &[T]) -> String {
    // Vec<T: Serialize> to a JSON array cannot fail.
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}
