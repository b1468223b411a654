//! Error types for ingestion operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or serializing delimited text.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file bytes.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a table back to delimited text.
    #[error("failed to serialize delimited text: {message}")]
    Serialize { message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
