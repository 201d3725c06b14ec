// Error type for the column adapter

use thiserror::Error;

/// Errors surfaced by the bind/result conversions.
///
/// Both variants wrap the underlying `serde_json` error and propagate to the
/// caller unchanged; there is no local recovery.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Serialization error: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Result type alias using FieldError
pub type Result<T> = std::result::Result<T, FieldError>;
