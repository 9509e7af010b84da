//! Error types for extraction and document merging.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwaggifyError {
    /// The persisted document is not valid JSON.
    #[error("Malformed swagger document: {0}")]
    MalformedDocument(#[source] serde_json::Error),

    /// The document parsed, but has no `swaggerDefinition` object to merge into.
    #[error("Swagger document has no `swaggerDefinition` object")]
    MissingSwaggerDefinition,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Swagger document already exists: {}", .0.display())]
    DocumentExists(PathBuf),
}

// Convenience alias
pub type SwaggifyResult<T> = Result<T, SwaggifyError>;
