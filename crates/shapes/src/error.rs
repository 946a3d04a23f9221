//! Error types for JSON conversion.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapesError {
    /// The value could not be written as JSON, or the text was not valid
    /// JSON for the requested type.
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ShapesError {
    fn from(err: serde_json::Error) -> Self {
        ShapesError::Json(err.to_string())
    }
}
