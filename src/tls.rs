//! Build rustls configurations from certificate providers.
//!
//! All configs use the ring crypto provider and rustls' safe default
//! protocol versions.

use std::sync::Arc;

use rustls::crypto::{ring, CryptoProvider};
use rustls::server::WebPkiClientVerifier;
use rustls::{ClientConfig, RootCertStore, ServerConfig};

use crate::errors::{Error, Result};
use crate::provider::{CertificateAuthorityProvider, KeyPairProvider};
use crate::utils::certificates::parse_pem_certificates;

fn crypto_provider() -> Arc<CryptoProvider> {
    Arc::new(ring::default_provider())
}

/// Load the CA bundle called `name` into a root store.
///
/// Every certificate in the bundle must be a usable trust anchor.
pub async fn root_cert_store<P>(provider: &P, name: &str) -> Result<RootCertStore>
where
    P: CertificateAuthorityProvider + ?Sized,
{
    let pem = provider.ca_pem_certs(name).await?;
    let certs = parse_pem_certificates(&pem)
        .map_err(|source| Error::CaBundleParse { name: name.to_string(), source })?;

    if certs.is_empty() {
        return Err(Error::tls(format!("CA bundle {name} does not contain any certificates")));
    }

    let mut store = RootCertStore::empty();
    for cert in certs {
        store
            .add(cert)
            .map_err(|e| Error::tls(format!("CA bundle {name} contains an unusable certificate: {e}")))?;
    }

    tracing::debug!(name = %name, roots = store.len(), "loaded CA bundle");
    Ok(store)
}

/// Server config presenting the key pair `name`.
///
/// When `client_ca` is set, clients must present a certificate issued by that
/// CA bundle.
pub async fn server_config<P>(
    provider: &P,
    name: &str,
    client_ca: Option<&str>,
) -> Result<ServerConfig>
where
    P: CertificateAuthorityProvider + KeyPairProvider + ?Sized,
{
    let crypto = crypto_provider();
    let (chain, key) = provider.x509_key_pair(name).await?.into_parts();

    let builder = ServerConfig::builder_with_provider(crypto.clone())
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::tls(e.to_string()))?;

    let builder = match client_ca {
        Some(ca_name) => {
            let roots = root_cert_store(provider, ca_name).await?;
            let verifier = WebPkiClientVerifier::builder_with_provider(Arc::new(roots), crypto)
                .build()
                .map_err(|e| Error::tls(format!("cannot build client verifier: {e}")))?;
            builder.with_client_cert_verifier(verifier)
        }
        None => builder.with_no_client_auth(),
    };

    builder.with_single_cert(chain, key).map_err(|e| Error::tls(e.to_string()))
}

/// Client config trusting the CA bundle `ca_name`, optionally authenticating
/// with the key pair `identity`.
pub async fn client_config<P>(
    provider: &P,
    ca_name: &str,
    identity: Option<&str>,
) -> Result<ClientConfig>
where
    P: CertificateAuthorityProvider + KeyPairProvider + ?Sized,
{
    let roots = root_cert_store(provider, ca_name).await?;

    let builder = ClientConfig::builder_with_provider(crypto_provider())
        .with_safe_default_protocol_versions()
        .map_err(|e| Error::tls(e.to_string()))?
        .with_root_certificates(roots);

    match identity {
        Some(name) => {
            let (chain, key) = provider.x509_key_pair(name).await?.into_parts();
            builder.with_client_auth_cert(chain, key).map_err(|e| Error::tls(e.to_string()))
        }
        None => Ok(builder.with_no_client_auth()),
    }
}
