//! JSON codec for persisted collections.
//!
//! Each collection is stored as one JSON array under its own key. A key that
//! was never written decodes to an empty collection; a key holding something
//! that does not parse is reported as [`StockError::MalformedPersistedData`]
//! so the caller can decide whether to recover.

use crate::error::{Result, StockError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn encode<T: Serialize>(records: &[T]) -> Result<String> {
    serde_json::to_string(records).map_err(StockError::Serialization)
}

pub fn decode<T: DeserializeOwned>(key: &str, raw: Option<&str>) -> Result<Vec<T>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|source| StockError::MalformedPersistedData {
        key: key.to_string(),
        source,
    })
}
