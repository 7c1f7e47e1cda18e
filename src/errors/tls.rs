use thiserror::Error;

/// Failures raised while turning certificate and private key PEM bytes into a
/// verified key pair.
#[derive(Debug, Error)]
pub enum KeyPairError {
    /// No certificates were found in the supplied PEM data.
    #[error("certificate data does not contain any certificates")]
    EmptyCertificateChain,

    /// The certificate PEM contents were invalid or unreadable.
    #[error("certificate data is not a valid PEM: {source}")]
    InvalidCertificatePem {
        #[source]
        source: anyhow::Error,
    },

    /// The private key PEM contents were invalid or unsupported.
    #[error("private key data does not contain a supported private key{}", .source.as_ref().map(|e| format!(": {e}")).unwrap_or_default())]
    InvalidPrivateKey {
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The leaf certificate could not be decoded far enough to find its public key.
    #[error("failed to extract certificate metadata: {source}")]
    CertificateMetadata {
        #[source]
        source: anyhow::Error,
    },

    /// The certificate uses a public key algorithm we cannot check the key against.
    #[error("unsupported public key algorithm {oid}")]
    UnsupportedKeyAlgorithm { oid: String },

    /// The supplied certificate and key do not match.
    #[error("private key does not match public key")]
    CertificateKeyMismatch,
}
