//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rcgen::{BasicConstraints, CertificateParams, DnType, IsCa, KeyPair};
use tlskit::{PathReader, ReadError};

/// RSA CA certificate (CN=tlskit). Its key is not part of the fixtures.
pub const CERTIFICATE_AUTHORITY: &str = include_str!("../fixtures/ca.crt");

/// RSA leaf certificate issued by [`CERTIFICATE_AUTHORITY`].
pub const TESTING_CERTIFICATE: &str = include_str!("../fixtures/testing.crt");

/// PKCS#1 private key for [`TESTING_CERTIFICATE`].
pub const TESTING_KEY: &str = include_str!("../fixtures/testing.key");

/// Reader that serves canned responses and records every key it is asked for.
///
/// Unknown keys fail with an "unexpected call" error so tests notice paths
/// they did not anticipate.
#[derive(Default)]
pub struct RecordingReader {
    values: HashMap<String, Result<Vec<u8>, String>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(mut self, path: &str, data: impl Into<Vec<u8>>) -> Self {
        self.values.insert(path.to_string(), Ok(data.into()));
        self
    }

    pub fn with_error(mut self, path: &str, message: &str) -> Self {
        self.values.insert(path.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PathReader for RecordingReader {
    async fn read_path(&self, path: &str) -> Result<Vec<u8>, ReadError> {
        self.calls.lock().unwrap().push(path.to_string());
        match self.values.get(path) {
            Some(Ok(data)) => Ok(data.clone()),
            Some(Err(message)) => Err(ReadError::backend(message.clone())),
            None => Err(ReadError::backend(format!("unexpected call read_path({path:?})"))),
        }
    }
}

/// Freshly generated PEM material.
pub struct GeneratedPair {
    pub cert_pem: String,
    pub key_pem: String,
}

/// Self-signed ECDSA P-256 certificate for `localhost`.
pub fn self_signed(common_name: &str) -> GeneratedPair {
    let mut params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
    params.distinguished_name.push(DnType::CommonName, common_name);
    let key_pair = KeyPair::generate().unwrap();
    let cert = params.self_signed(&key_pair).unwrap();

    GeneratedPair { cert_pem: cert.pem(), key_pem: key_pair.serialize_pem() }
}

/// A CA plus a `localhost` leaf it issued.
pub struct GeneratedChain {
    pub ca: GeneratedPair,
    pub leaf: GeneratedPair,
}

pub fn ca_with_leaf() -> GeneratedChain {
    let mut ca_params = CertificateParams::new(Vec::<String>::new()).unwrap();
    ca_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    ca_params.distinguished_name.push(DnType::CommonName, "tlskit test CA");
    let ca_key = KeyPair::generate().unwrap();
    let ca_cert = ca_params.self_signed(&ca_key).unwrap();

    let mut leaf_params = CertificateParams::new(vec!["localhost".to_string()]).unwrap();
    leaf_params.distinguished_name.push(DnType::CommonName, "localhost");
    let leaf_key = KeyPair::generate().unwrap();
    let leaf_cert = leaf_params.signed_by(&leaf_key, &ca_cert, &ca_key).unwrap();

    GeneratedChain {
        ca: GeneratedPair { cert_pem: ca_cert.pem(), key_pem: ca_key.serialize_pem() },
        leaf: GeneratedPair {
            cert_pem: format!("{}{}", leaf_cert.pem(), ca_cert.pem()),
            key_pem: leaf_key.serialize_pem(),
        },
    }
}
