//! Error types for byte source reads.

use thiserror::Error;

/// Errors a [`PathReader`](super::PathReader) can report.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The local file could not be read.
    #[error("cannot read file by name {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Nothing is stored under the key.
    #[error("nothing found for key {key}")]
    NotFound { key: String },

    /// The store returned an entry without a usable string payload.
    #[error("entry {key} has no string value")]
    EmptyValue { key: String },

    /// The backing service call failed.
    #[error("{message}{}", .source.as_ref().map(|e| format!(": {e}")).unwrap_or_default())]
    Backend {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl ReadError {
    /// Create an I/O error for a filesystem path.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Create a not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create an empty value error.
    pub fn empty_value(key: impl Into<String>) -> Self {
        Self::EmptyValue { key: key.into() }
    }

    /// Create a backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend { message: message.into(), source: None }
    }

    /// Create a backend error that keeps the underlying client error.
    pub fn backend_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Backend { message: message.into(), source: Some(source.into()) }
    }
}
