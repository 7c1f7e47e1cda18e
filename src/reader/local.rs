//! Local filesystem reader.

use async_trait::async_trait;

use super::{PathReader, ReadError};

/// Reads the key directly as a path on local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPathReader;

impl LocalPathReader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PathReader for LocalPathReader {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        tokio::fs::read(path).await.map_err(|e| ReadError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"-----BEGIN CERTIFICATE-----").unwrap();

        let reader = LocalPathReader::new();
        let content = reader.read_path(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(content, b"-----BEGIN CERTIFICATE-----".to_vec());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let reader = LocalPathReader::new();
        let err = reader.read_path("/path/does/not/exist").await.unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
        assert!(err.to_string().contains("/path/does/not/exist"));
    }
}
