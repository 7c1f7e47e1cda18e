//! Utility functions and helpers

pub mod certificates;

pub use certificates::{
    certificate_info, parse_pem_certificates, parse_x509_key_pair, CertificateInfo, CertificateKeyPair,
};
