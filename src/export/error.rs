//! Export error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding a trace export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Export version is not supported by this version
    #[error("Unsupported export version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Decoded trace is not a well-formed run
    #[error("Export validation failed: {0}")]
    ValidationFailed(String),
}
