//! JSON conversion helpers.
//!
//! Decoding always targets a concrete type: the JSON is parsed and its
//! fields copied into the record, which then carries that type's methods.

use serde::{Serialize, de::DeserializeOwned};

use crate::error::ShapesError;

/// Serializes `value` to compact JSON text.
///
/// Numbers use serde_json's formatting, so an `f64` field holding `10`
/// is written as `10.0`.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ShapesError> {
    Ok(serde_json::to_string(value)?)
}

/// Parses `json` into a `T`.
///
/// Fields the type does not declare are ignored; missing fields are an error.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ShapesError> {
    serde_json::from_str(json).map_err(|err| {
        log::debug!("from_json failed: {}", err);
        ShapesError::from(err)
    })
}
