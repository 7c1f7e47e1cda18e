//! Name to path resolution on top of a [`PathReader`].
//!
//! A logical name is turned into a key by joining the base path and the name
//! plus extension with the path separator:
//!
//! ```text
//! base_path + path_separator + name + extension
//! ```
//!
//! The join is plain string concatenation. An empty base path still yields a
//! leading separator (`"ca"` resolves to `"/ca.crt"` with the defaults) and
//! nothing is normalised, so readers see exactly the key described above.
//!
//! # Example
//!
//! ```rust,ignore
//! use tlskit::provider::{KeyPairProvider, PathBasedProvider, PathOption};
//! use tlskit::reader::LocalPathReader;
//!
//! let provider = PathBasedProvider::new(
//!     LocalPathReader::new(),
//!     [PathOption::BasePath("/etc/tls".into()), PathOption::KeyExtension(".pem".into())],
//! );
//!
//! // Reads /etc/tls/server.crt then /etc/tls/server.pem
//! let pair = provider.x509_key_pair("server").await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CertificateAuthorityProvider, KeyPairProvider};
use crate::errors::{Error, Result};
use crate::reader::PathReader;
use crate::utils::certificates::{parse_x509_key_pair, CertificateKeyPair};

pub const DEFAULT_CERTIFICATE_EXTENSION: &str = ".crt";
pub const DEFAULT_KEY_EXTENSION: &str = ".key";
pub const DEFAULT_PATH_SEPARATOR: &str = "/";

/// How names are turned into paths. Fixed once a provider is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathProviderOptions {
    /// Prefix of every resolved path (empty by default)
    pub base_path: String,

    /// Joins the base path and the name
    pub path_separator: String,

    /// Appended to the name for certificate lookups
    pub certificate_extension: String,

    /// Appended to the name for private key lookups
    pub key_extension: String,
}

impl Default for PathProviderOptions {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            path_separator: DEFAULT_PATH_SEPARATOR.to_string(),
            certificate_extension: DEFAULT_CERTIFICATE_EXTENSION.to_string(),
            key_extension: DEFAULT_KEY_EXTENSION.to_string(),
        }
    }
}

impl PathProviderOptions {
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_path_separator(mut self, path_separator: impl Into<String>) -> Self {
        self.path_separator = path_separator.into();
        self
    }

    pub fn with_certificate_extension(mut self, extension: impl Into<String>) -> Self {
        self.certificate_extension = extension.into();
        self
    }

    pub fn with_key_extension(mut self, extension: impl Into<String>) -> Self {
        self.key_extension = extension.into();
        self
    }

    /// Apply directives in order; later directives win.
    pub fn apply<I: IntoIterator<Item = PathOption>>(mut self, options: I) -> Self {
        for option in options {
            option.apply(&mut self);
        }
        self
    }

    /// Load options from environment variables, keeping defaults for unset ones.
    ///
    /// - `TLSKIT_BASE_PATH`
    /// - `TLSKIT_PATH_SEPARATOR`
    /// - `TLSKIT_CERTIFICATE_EXTENSION`
    /// - `TLSKIT_KEY_EXTENSION`
    ///
    /// Values are taken verbatim, an empty value included.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();

        Self::default().apply(
            [
                var("TLSKIT_BASE_PATH").map(PathOption::BasePath),
                var("TLSKIT_PATH_SEPARATOR").map(PathOption::PathSeparator),
                var("TLSKIT_CERTIFICATE_EXTENSION").map(PathOption::CertificateExtension),
                var("TLSKIT_KEY_EXTENSION").map(PathOption::KeyExtension),
            ]
            .into_iter()
            .flatten(),
        )
    }

    /// Path a certificate called `name` is read from.
    pub fn certificate_path(&self, name: &str) -> String {
        self.make_path(name, &self.certificate_extension)
    }

    /// Path the private key called `name` is read from.
    pub fn key_path(&self, name: &str) -> String {
        self.make_path(name, &self.key_extension)
    }

    fn make_path(&self, name: &str, extension: &str) -> String {
        let file_name = with_extension(name, extension);
        [self.base_path.as_str(), file_name.as_str()].join(self.path_separator.as_str())
    }
}

fn with_extension(name: &str, extension: &str) -> String {
    format!("{name}{extension}")
}

/// A single configuration directive. Each one overwrites exactly one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOption {
    BasePath(String),
    PathSeparator(String),
    CertificateExtension(String),
    KeyExtension(String),
}

impl PathOption {
    pub fn apply(self, options: &mut PathProviderOptions) {
        match self {
            Self::BasePath(value) => options.base_path = value,
            Self::PathSeparator(value) => options.path_separator = value,
            Self::CertificateExtension(value) => options.certificate_extension = value,
            Self::KeyExtension(value) => options.key_extension = value,
        }
    }
}

/// Resolves names to paths and reads them through `R`.
///
/// Holds no mutable state; sharing one provider across tasks is safe
/// whenever `R` is.
#[derive(Debug, Clone)]
pub struct PathBasedProvider<R> {
    options: PathProviderOptions,
    reader: R,
}

impl<R: PathReader> PathBasedProvider<R> {
    /// Build a provider from the defaults plus `options`, applied in order.
    /// Nothing is validated here; problems surface on the first read.
    pub fn new<I: IntoIterator<Item = PathOption>>(reader: R, options: I) -> Self {
        Self::with_options(reader, PathProviderOptions::default().apply(options))
    }

    pub fn with_options(reader: R, options: PathProviderOptions) -> Self {
        Self { options, reader }
    }

    pub fn options(&self) -> &PathProviderOptions {
        &self.options
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        tracing::debug!(path = %path, "reading certificate material");
        self.reader.read_path(path).await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "failed to read certificate material");
            Error::read_failure(path, e)
        })
    }
}

#[async_trait]
impl<R: PathReader> CertificateAuthorityProvider for PathBasedProvider<R> {
    async fn ca_pem_certs(&self, name: &str) -> Result<Vec<u8>> {
        self.read(&self.options.certificate_path(name)).await
    }
}

#[async_trait]
impl<R: PathReader> KeyPairProvider for PathBasedProvider<R> {
    async fn x509_key_pair(&self, name: &str) -> Result<CertificateKeyPair> {
        let cert_path = self.options.certificate_path(name);
        let cert_data = self.read(&cert_path).await?;

        let key_path = self.options.key_path(name);
        let key_data = self.read(&key_path).await?;

        let pair = parse_x509_key_pair(&cert_data, &key_data)
            .map_err(|source| Error::KeyPairParse { cert_path, key_path, source })?;

        tracing::debug!(
            name = %name,
            subject = %pair.info().subject,
            issuer = %pair.info().issuer,
            not_after = %pair.info().not_after,
            "loaded key pair"
        );

        Ok(pair)
    }
}
