//! # tlskit
//!
//! Load TLS certificate authorities and certificate/private key pairs by
//! logical name. A name such as `ca` or `server` is turned into storage
//! paths by a [`PathBasedProvider`] and the bytes are fetched through a
//! pluggable [`PathReader`]: the local filesystem, environment variables,
//! HashiCorp Vault, or (with the `aws` feature) AWS Secrets Manager and SSM
//! Parameter Store.
//!
//! ```text
//! name → PathProviderOptions → path → PathReader → bytes → CertificateKeyPair
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tlskit::{KeyPairProvider, LocalPathReader, PathBasedProvider, PathOption, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let provider = PathBasedProvider::new(
//!         LocalPathReader::new(),
//!         [PathOption::BasePath("/etc/tls".to_string())],
//!     );
//!     let pair = provider.x509_key_pair("server").await?;
//!     println!("{}", pair.info().subject);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod observability;
pub mod provider;
pub mod reader;
pub mod tls;
pub mod utils;

// Re-export commonly used types and traits
pub use config::{Config, SourceKind};
pub use errors::{Error, KeyPairError, Result};
pub use observability::init_logging;
pub use provider::{
    CertificateAuthorityProvider, CertificateProvider, KeyPairProvider, PathBasedProvider,
    PathOption, PathProviderOptions,
};
pub use reader::{EnvPathReader, LocalPathReader, PathReader, ReadError, StaticPathReader};
pub use utils::{CertificateInfo, CertificateKeyPair};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
