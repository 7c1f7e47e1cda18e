//! AWS Secrets Manager reader.
//!
//! The key is used as the secret id and the secret's string payload is
//! returned as bytes. Binary secrets are not supported.

use async_trait::async_trait;

use super::{PathReader, ReadError};

/// The subset of the Secrets Manager API the reader needs.
#[async_trait]
pub trait SecretsManager: Send + Sync {
    /// Fetch the string payload of the current version of `secret_id`.
    /// `Ok(None)` means the secret exists but carries no string payload.
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, ReadError>;
}

#[async_trait]
impl SecretsManager for aws_sdk_secretsmanager::Client {
    async fn get_secret_string(&self, secret_id: &str) -> Result<Option<String>, ReadError> {
        let output = self.get_secret_value().secret_id(secret_id).send().await.map_err(|e| {
            ReadError::backend_with_source("GetSecretValue request failed", e)
        })?;
        Ok(output.secret_string().map(str::to_string))
    }
}

/// Reads keys as Secrets Manager secret ids.
pub struct SecretsManagerPathReader<C> {
    client: C,
}

impl<C: SecretsManager> SecretsManagerPathReader<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl SecretsManagerPathReader<aws_sdk_secretsmanager::Client> {
    /// Build a reader from the default AWS configuration chain
    /// (environment, profile, instance metadata).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_secretsmanager::Client::new(&config))
    }
}

#[async_trait]
impl<C: SecretsManager> PathReader for SecretsManagerPathReader<C> {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        match self.client.get_secret_string(path).await {
            Ok(Some(value)) => Ok(value.into_bytes()),
            Ok(None) => Err(ReadError::empty_value(path)),
            Err(e) => {
                let message = format!("cannot get secret value by id {}", path);
                Err(ReadError::backend_with_source(message, e))
            }
        }
    }
}
