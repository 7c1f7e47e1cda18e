//! Certificate provider capabilities.
//!
//! Callers depend on the narrowest capability they need:
//! - [`CertificateAuthorityProvider`]: raw CA bundle bytes by name
//! - [`KeyPairProvider`]: a verified certificate/private key pair by name
//! - [`CertificateProvider`]: both, implemented automatically
//!
//! [`PathBasedProvider`] implements all three on top of any
//! [`PathReader`](crate::reader::PathReader).

pub mod path_based;

use async_trait::async_trait;

use crate::utils::CertificateKeyPair;
use crate::Result;

pub use path_based::{PathBasedProvider, PathOption, PathProviderOptions};

/// Supplies PEM encoded certificate authority bundles.
#[async_trait]
pub trait CertificateAuthorityProvider: Send + Sync {
    /// Return the PEM bytes of the CA bundle called `name`, unmodified.
    async fn ca_pem_certs(&self, name: &str) -> Result<Vec<u8>>;
}

/// Supplies certificate/private key pairs.
#[async_trait]
pub trait KeyPairProvider: Send + Sync {
    /// Load and verify the key pair called `name`.
    async fn x509_key_pair(&self, name: &str) -> Result<CertificateKeyPair>;
}

/// Both capabilities.
pub trait CertificateProvider: CertificateAuthorityProvider + KeyPairProvider {}

impl<T: CertificateAuthorityProvider + KeyPairProvider + ?Sized> CertificateProvider for T {}

#[async_trait]
impl<P: CertificateAuthorityProvider + ?Sized> CertificateAuthorityProvider for std::sync::Arc<P> {
    async fn ca_pem_certs(&self, name: &str) -> Result<Vec<u8>> {
        (**self).ca_pem_certs(name).await
    }
}

#[async_trait]
impl<P: KeyPairProvider + ?Sized> KeyPairProvider for std::sync::Arc<P> {
    async fn x509_key_pair(&self, name: &str) -> Result<CertificateKeyPair> {
        (**self).x509_key_pair(name).await
    }
}
