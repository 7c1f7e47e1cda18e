//! HashiCorp Vault reader.
//!
//! Reads PEM material stored in Vault's KV v2 secrets engine. The key is
//! the secret path under the configured mount and the PEM text is taken from
//! one field of the secret's data (`value` by default).
//!
//! # Example
//!
//! ```rust,ignore
//! use tlskit::reader::{VaultConfig, VaultPathReader};
//!
//! let config = VaultConfig {
//!     address: "https://vault.example.com".to_string(),
//!     token: Some("vault-token".to_string()),
//!     namespace: None,
//!     mount_path: "secret".to_string(),
//!     field: "value".to_string(),
//! };
//! let reader = VaultPathReader::new(config)?;
//! ```
//!
//! Store material with `vault kv put secret/tls/ca.crt value=@ca.crt`.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use vaultrs::client::{VaultClient, VaultClientSettingsBuilder};
use vaultrs::error::ClientError;
use vaultrs::kv2;

use super::{PathReader, ReadError};

/// Configuration for the Vault reader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault server address (e.g. "https://vault.example.com:8200")
    pub address: String,

    /// Authentication token
    #[serde(skip_serializing)]
    pub token: Option<String>,

    /// Optional namespace for multi-tenancy (Vault Enterprise)
    pub namespace: Option<String>,

    /// KV v2 mount path
    pub mount_path: String,

    /// Field of the secret data holding the PEM text
    pub field: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8200".to_string(),
            token: None,
            namespace: None,
            mount_path: "secret".to_string(),
            field: "value".to_string(),
        }
    }
}

impl VaultConfig {
    /// Load Vault configuration from environment variables.
    ///
    /// - `TLSKIT_VAULT_ADDR` (falls back to `VAULT_ADDR`)
    /// - `TLSKIT_VAULT_TOKEN` (falls back to `VAULT_TOKEN`)
    /// - `TLSKIT_VAULT_NAMESPACE`
    /// - `TLSKIT_VAULT_MOUNT` (default: "secret")
    /// - `TLSKIT_VAULT_FIELD` (default: "value")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |names: &[&str]| names.iter().find_map(|name| std::env::var(name).ok());

        Self {
            address: var(&["TLSKIT_VAULT_ADDR", "VAULT_ADDR"]).unwrap_or(defaults.address),
            token: var(&["TLSKIT_VAULT_TOKEN", "VAULT_TOKEN"]),
            namespace: var(&["TLSKIT_VAULT_NAMESPACE"]),
            mount_path: var(&["TLSKIT_VAULT_MOUNT"]).unwrap_or(defaults.mount_path),
            field: var(&["TLSKIT_VAULT_FIELD"]).unwrap_or(defaults.field),
        }
    }
}

/// Reads keys from a Vault KV v2 mount.
pub struct VaultPathReader {
    client: VaultClient,
    mount_path: String,
    field: String,
}

impl VaultPathReader {
    /// Creates a reader. No request is made until the first read.
    ///
    /// # Errors
    ///
    /// [`ReadError::Backend`] if the address is empty or the client settings
    /// are invalid.
    pub fn new(config: VaultConfig) -> Result<Self, ReadError> {
        if config.address.is_empty() {
            return Err(ReadError::backend("Vault address cannot be empty"));
        }

        let mut settings_builder = VaultClientSettingsBuilder::default();
        settings_builder.address(&config.address);

        if let Some(ref token) = config.token {
            settings_builder.token(token);
        }

        if let Some(namespace) = config.namespace {
            settings_builder.namespace(Some(namespace));
        }

        let settings = settings_builder
            .build()
            .map_err(|e| ReadError::backend_with_source("Invalid Vault configuration", e))?;

        let client = VaultClient::new(settings)
            .map_err(|e| ReadError::backend_with_source("Failed to create Vault client", e))?;

        tracing::debug!(address = %config.address, mount = %config.mount_path, "Vault reader configured");

        Ok(Self { client, mount_path: config.mount_path, field: config.field })
    }

    /// Secret path under the mount. Vault paths are relative, so leading
    /// slashes produced by an empty base path are dropped.
    fn secret_path(path: &str) -> &str {
        path.trim_start_matches('/')
    }
}

#[async_trait]
impl PathReader for VaultPathReader {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        let secret: HashMap<String, String> =
            kv2::read(&self.client, &self.mount_path, Self::secret_path(path)).await.map_err(
                |e| match e {
                    ClientError::APIError { code: 404, .. } => ReadError::not_found(path),
                    other => ReadError::backend_with_source(
                        format!("cannot read Vault secret {} from mount {}", path, self.mount_path),
                        other,
                    ),
                },
            )?;

        secret.get(&self.field).map(|value| value.clone().into_bytes()).ok_or_else(|| {
            ReadError::backend(format!("Vault secret {} has no '{}' field", path, self.field))
        })
    }
}
