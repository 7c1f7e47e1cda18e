//! Environment variable reader.
//!
//! Intended for **development and testing only**. PEM material in
//! environment variables is visible in process listings and has no access
//! control or audit trail. Use Vault or a cloud secrets manager in production.
//!
//! # Usage
//!
//! Keys are mapped to variables under the `TLSKIT_PEM_` prefix. Every
//! character that is not ASCII alphanumeric becomes `_` and the result is
//! uppercased:
//!
//! ```bash
//! export TLSKIT_PEM__CA_CRT="$(cat ca.crt)"       # key "/ca.crt"
//! export TLSKIT_PEM__TLS_SERVER_KEY="$(cat s.key)" # key "/tls/server.key"
//! ```

use async_trait::async_trait;

use super::{PathReader, ReadError};

/// Default environment variable prefix.
pub const DEFAULT_PREFIX: &str = "TLSKIT_PEM_";

/// Reads keys from environment variables (development only).
#[derive(Debug, Clone)]
pub struct EnvPathReader {
    prefix: String,
}

impl Default for EnvPathReader {
    fn default() -> Self {
        Self { prefix: DEFAULT_PREFIX.to_string() }
    }
}

impl EnvPathReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Converts a key to the environment variable name it is read from.
    pub fn key_to_env_var(&self, key: &str) -> String {
        let suffix: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

#[async_trait]
impl PathReader for EnvPathReader {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        let env_var = self.key_to_env_var(path);
        match std::env::var_os(&env_var) {
            Some(value) => Ok(value.into_encoded_bytes()),
            None => Err(ReadError::not_found(format!("{} (looking for {})", path, env_var))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_env_var() {
        let reader = EnvPathReader::new();
        assert_eq!(reader.key_to_env_var("/ca.crt"), "TLSKIT_PEM__CA_CRT");
        assert_eq!(reader.key_to_env_var("/tls/server.key"), "TLSKIT_PEM__TLS_SERVER_KEY");
        assert_eq!(reader.key_to_env_var(":base:path:ca.pub"), "TLSKIT_PEM__BASE_PATH_CA_PUB");
    }

    #[test]
    fn test_custom_prefix() {
        let reader = EnvPathReader::with_prefix("APP_");
        assert_eq!(reader.key_to_env_var("ca.crt"), "APP_CA_CRT");
    }

    #[tokio::test]
    async fn test_read_from_env() {
        std::env::set_var("TLSKIT_PEM__ENV_TEST_CRT", "pem-data");

        let reader = EnvPathReader::new();
        let content = reader.read_path("/env_test.crt").await.unwrap();
        assert_eq!(content, b"pem-data".to_vec());

        std::env::remove_var("TLSKIT_PEM__ENV_TEST_CRT");
    }

    #[tokio::test]
    async fn test_missing_variable() {
        let reader = EnvPathReader::new();
        let err = reader.read_path("/does_not_exist.crt").await.unwrap_err();
        assert!(matches!(err, ReadError::NotFound { .. }));
        assert!(err.to_string().contains("TLSKIT_PEM__DOES_NOT_EXIST_CRT"));
    }
}
