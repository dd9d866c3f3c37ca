//! Document error types.

use thiserror::Error;

/// Errors that can occur when saving or loading a machine document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Document version is not supported by this version
    #[error("Unsupported document version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
