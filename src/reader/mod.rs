//! Byte sources that providers read certificate material from.
//!
//! A [`PathReader`] turns an opaque key into raw bytes. Providers build the
//! key; readers only fetch it. The core never inspects the key beyond what it
//! constructed, and it never retries based on the failure.
//!
//! # Supported Sources
//!
//! - **Local filesystem**: [`local::LocalPathReader`]
//! - **Environment variables**: [`env::EnvPathReader`] (development only)
//! - **HashiCorp Vault KV v2**: [`vault::VaultPathReader`]
//! - **AWS Secrets Manager**: `aws_secrets_manager::SecretsManagerPathReader` (feature `aws`)
//! - **AWS SSM Parameter Store**: `aws_ssm::ParameterStorePathReader` (feature `aws`)
//! - **In-memory**: [`StaticPathReader`]
//!
//! # Example Implementation
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use tlskit::reader::{PathReader, ReadError};
//!
//! struct MyStore;
//!
//! #[async_trait]
//! impl PathReader for MyStore {
//!     async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
//!         Err(ReadError::not_found(path))
//!     }
//! }
//! ```

#[cfg(feature = "aws")]
pub mod aws_secrets_manager;
#[cfg(feature = "aws")]
pub mod aws_ssm;
pub mod env;
pub mod error;
pub mod local;
pub mod vault;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

pub use env::EnvPathReader;
pub use error::ReadError;
pub use local::LocalPathReader;
pub use vault::{VaultConfig, VaultPathReader};

/// Capability to read the bytes addressed by a key.
///
/// Implementations MUST NOT log the returned bytes.
#[async_trait]
pub trait PathReader: Send + Sync {
    /// Return the raw content addressed by `path`.
    ///
    /// # Errors
    ///
    /// Any [`ReadError`] when the key is absent, inaccessible, or the backing
    /// call fails.
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError>;
}

#[async_trait]
impl<R: PathReader + ?Sized> PathReader for Arc<R> {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        (**self).read_path(path).await
    }
}

#[async_trait]
impl<R: PathReader + ?Sized> PathReader for Box<R> {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        (**self).read_path(path).await
    }
}

#[async_trait]
impl<R: PathReader + ?Sized> PathReader for &R {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        (**self).read_path(path).await
    }
}

/// In-memory reader over a fixed map of paths to contents.
#[derive(Debug, Clone, Default)]
pub struct StaticPathReader {
    entries: HashMap<String, Vec<u8>>,
}

impl StaticPathReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any previous content for `path`.
    pub fn with_entry(mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.entries.insert(path.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Vec<u8>>> FromIterator<(K, V)> for StaticPathReader {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[async_trait]
impl PathReader for StaticPathReader {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        self.entries.get(path).cloned().ok_or_else(|| ReadError::not_found(path))
    }
}
