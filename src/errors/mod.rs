//! # Error Handling
//!
//! Error types for tlskit. Every failure surfaced by a provider carries the
//! resolved path it was working on together with the underlying cause.

pub mod tls;

pub use tls::KeyPairError;

use crate::reader::ReadError;

/// Custom result type for tlskit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tlskit
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The reader could not produce bytes for a resolved path
    #[error("cannot read path {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: ReadError,
    },

    /// Bytes were read but do not form a matching certificate/private key pair
    #[error("parse a public/private key pair ({cert_path}, {key_path}): {source}")]
    KeyPairParse {
        cert_path: String,
        key_path: String,
        #[source]
        source: KeyPairError,
    },

    /// A CA bundle was read but could not be decoded
    #[error("parse CA bundle {name}: {source}")]
    CaBundleParse {
        name: String,
        #[source]
        source: KeyPairError,
    },

    /// rustls rejected the loaded material
    #[error("TLS error: {0}")]
    Tls(String),

    /// Invalid environment or command line configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new read failure for the given resolved path
    pub fn read_failure(path: impl Into<String>, source: ReadError) -> Self {
        Self::ReadFailure { path: path.into(), source }
    }

    /// Create a new TLS error
    pub fn tls<S: Into<String>>(message: S) -> Self {
        Self::Tls(message.into())
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// The resolved path involved in the failure, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::ReadFailure { path, .. } => Some(path),
            Self::KeyPairParse { cert_path, .. } => Some(cert_path),
            Self::CaBundleParse { .. } | Self::Tls(_) | Self::Config(_) => None,
        }
    }
}
