//! AWS Systems Manager Parameter Store reader.
//!
//! The key is used as the parameter name. Decryption is always requested so
//! `SecureString` parameters come back in plain text.

use async_trait::async_trait;

use super::{PathReader, ReadError};

/// The subset of the SSM API the reader needs.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch the value of `name`, decrypting it when `with_decryption` is set.
    async fn get_parameter_value(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<Option<String>, ReadError>;
}

#[async_trait]
impl ParameterStore for aws_sdk_ssm::Client {
    async fn get_parameter_value(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<Option<String>, ReadError> {
        let output = self
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|e| ReadError::backend_with_source("GetParameter request failed", e))?;
        Ok(output.parameter().and_then(|p| p.value()).map(str::to_string))
    }
}

/// Reads keys as Parameter Store parameter names.
pub struct ParameterStorePathReader<C> {
    client: C,
}

impl<C: ParameterStore> ParameterStorePathReader<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl ParameterStorePathReader<aws_sdk_ssm::Client> {
    /// Build a reader from the default AWS configuration chain.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_ssm::Client::new(&config))
    }
}

#[async_trait]
impl<C: ParameterStore> PathReader for ParameterStorePathReader<C> {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        match self.client.get_parameter_value(path, true).await {
            Ok(Some(value)) => Ok(value.into_bytes()),
            Ok(None) => Err(ReadError::empty_value(path)),
            Err(e) => {
                let message = format!("cannot get parameter by name {}", path);
                Err(ReadError::backend_with_source(message, e))
            }
        }
    }
}
