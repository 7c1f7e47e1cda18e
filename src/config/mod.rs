//! # Configuration Management
//!
//! Configuration is read from the environment (optionally seeded from a
//! `.env` file by the binary) and can be overridden from the command line.
//!
//! - `TLSKIT_SOURCE`: where material is read from (default: "local")
//! - `TLSKIT_ENV_PREFIX`: variable prefix for the "env" source
//! - `TLSKIT_VAULT_*`: see [`VaultConfig::from_env`]
//! - `TLSKIT_BASE_PATH` and friends: see [`PathProviderOptions::from_env`]

use std::fmt;
use std::str::FromStr;

use crate::provider::{PathBasedProvider, PathProviderOptions};
use crate::reader::{EnvPathReader, LocalPathReader, PathReader, VaultConfig, VaultPathReader};
use crate::{Error, Result};

/// Which byte source to read certificate material from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceKind {
    #[default]
    Local,
    Env,
    Vault,
    AwsSecretsManager,
    AwsSsm,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Env => "env",
            Self::Vault => "vault",
            Self::AwsSecretsManager => "aws-secrets-manager",
            Self::AwsSsm => "aws-ssm",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" | "file" | "fs" => Ok(Self::Local),
            "env" => Ok(Self::Env),
            "vault" => Ok(Self::Vault),
            "aws-secrets-manager" | "secretsmanager" => Ok(Self::AwsSecretsManager),
            "aws-ssm" | "ssm" => Ok(Self::AwsSsm),
            other => Err(Error::config(format!(
                "unknown source '{}' (expected local, env, vault, aws-secrets-manager or aws-ssm)",
                other
            ))),
        }
    }
}

/// Source selection plus the settings of the selected source.
#[derive(Debug, Clone, Default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    /// Prefix for the "env" source; the reader default when unset
    pub env_prefix: Option<String>,
    pub vault: VaultConfig,
}

impl SourceConfig {
    /// Create source configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kind = match std::env::var("TLSKIT_SOURCE") {
            Ok(value) => value.parse()?,
            Err(_) => SourceKind::default(),
        };

        Ok(Self {
            kind,
            env_prefix: std::env::var("TLSKIT_ENV_PREFIX").ok(),
            vault: VaultConfig::from_env(),
        })
    }

    /// Build the reader for the selected source.
    pub async fn build_reader(&self) -> Result<Box<dyn PathReader>> {
        tracing::debug!(source = %self.kind, "building reader");

        match self.kind {
            SourceKind::Local => Ok(Box::new(LocalPathReader::new())),
            SourceKind::Env => Ok(Box::new(match &self.env_prefix {
                Some(prefix) => EnvPathReader::with_prefix(prefix.clone()),
                None => EnvPathReader::new(),
            })),
            SourceKind::Vault => {
                let reader = VaultPathReader::new(self.vault.clone())
                    .map_err(|e| Error::config(e.to_string()))?;
                Ok(Box::new(reader))
            }
            #[cfg(feature = "aws")]
            SourceKind::AwsSecretsManager => Ok(Box::new(
                crate::reader::aws_secrets_manager::SecretsManagerPathReader::from_env().await,
            )),
            #[cfg(feature = "aws")]
            SourceKind::AwsSsm => {
                Ok(Box::new(crate::reader::aws_ssm::ParameterStorePathReader::from_env().await))
            }
            #[cfg(not(feature = "aws"))]
            SourceKind::AwsSecretsManager | SourceKind::AwsSsm => Err(Error::config(format!(
                "source '{}' requires tlskit to be built with the 'aws' feature",
                self.kind
            ))),
        }
    }
}

/// Complete configuration: where to read from and how names become paths.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: SourceConfig,
    pub paths: PathProviderOptions,
}

impl Config {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self { source: SourceConfig::from_env()?, paths: PathProviderOptions::from_env() })
    }

    /// Build a provider over the configured source.
    pub async fn build_provider(&self) -> Result<PathBasedProvider<Box<dyn PathReader>>> {
        let reader = self.source.build_reader().await?;
        Ok(PathBasedProvider::with_options(reader, self.paths.clone()))
    }
}
