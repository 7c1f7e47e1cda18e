//! Name resolution and reading through `PathBasedProvider`.

mod common;

use common::{RecordingReader, CERTIFICATE_AUTHORITY, TESTING_CERTIFICATE, TESTING_KEY};
use proptest::prelude::*;
use tlskit::{
    CertificateAuthorityProvider, Error, KeyPairProvider, PathBasedProvider, PathOption,
    PathProviderOptions,
};

const DEFAULTS: [PathOption; 0] = [];

fn ext(value: &str) -> PathOption {
    PathOption::CertificateExtension(value.to_string())
}

fn key_ext(value: &str) -> PathOption {
    PathOption::KeyExtension(value.to_string())
}

fn base(value: &str) -> PathOption {
    PathOption::BasePath(value.to_string())
}

fn sep(value: &str) -> PathOption {
    PathOption::PathSeparator(value.to_string())
}

#[tokio::test]
async fn ca_pem_certs_reads_resolved_paths() {
    let cases: Vec<(&str, Vec<PathOption>)> = vec![
        ("/ca.crt", vec![]),
        ("/the/base/path/ca.crt", vec![base("/the/base/path")]),
        ("/ca.pub", vec![ext(".pub")]),
        (":base:path:ca.pub", vec![ext(".pub"), sep(":"), base(":base:path")]),
    ];

    for (path, options) in cases {
        let reader = RecordingReader::new().with_data(path, CERTIFICATE_AUTHORITY);
        let provider = PathBasedProvider::new(reader, options);

        let pem = provider.ca_pem_certs("ca").await.unwrap_or_else(|e| panic!("{path}: {e}"));
        assert_eq!(pem, CERTIFICATE_AUTHORITY.as_bytes(), "{path}");
        assert_eq!(provider.reader().calls(), vec![path.to_string()]);
    }
}

#[tokio::test]
async fn ca_pem_certs_returns_bytes_unchanged() {
    let garbage = b"not a certificate \x00\xff".to_vec();
    let reader = RecordingReader::new().with_data("/ca.crt", garbage.clone());
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    assert_eq!(provider.ca_pem_certs("ca").await.unwrap(), garbage);
}

#[tokio::test]
async fn ca_pem_certs_propagates_reader_error() {
    let reader = RecordingReader::new().with_error("/ca.crt", "some error");
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let err = provider.ca_pem_certs("ca").await.unwrap_err();
    assert!(matches!(err, Error::ReadFailure { .. }));
    assert!(err.to_string().contains("some error"));
    assert_eq!(err.path(), Some("/ca.crt"));
}

#[tokio::test]
async fn x509_key_pair_reads_resolved_paths() {
    let cases: Vec<(&str, &str, Vec<PathOption>)> = vec![
        ("/testing.crt", "/testing.key", vec![]),
        (
            "/the/base/path/testing.crt",
            "/the/base/path/testing.key",
            vec![base("/the/base/path")],
        ),
        ("/testing.pub", "/testing.pem", vec![ext(".pub"), key_ext(".pem")]),
        (
            ":base:path:testing.pub",
            ":base:path:testing.pem",
            vec![ext(".pub"), key_ext(".pem"), sep(":"), base(":base:path")],
        ),
    ];

    for (cert_path, key_path, options) in cases {
        let reader = RecordingReader::new()
            .with_data(cert_path, TESTING_CERTIFICATE)
            .with_data(key_path, TESTING_KEY);
        let provider = PathBasedProvider::new(reader, options);

        let pair = provider
            .x509_key_pair("testing")
            .await
            .unwrap_or_else(|e| panic!("{cert_path}: {e}"));
        assert_eq!(pair.cert_chain().len(), 1);
        assert_eq!(
            provider.reader().calls(),
            vec![cert_path.to_string(), key_path.to_string()]
        );
    }
}

#[tokio::test]
async fn x509_key_pair_exposes_certificate_details() {
    let reader = RecordingReader::new()
        .with_data("/testing.crt", TESTING_CERTIFICATE)
        .with_data("/testing.key", TESTING_KEY);
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let pair = provider.x509_key_pair("testing").await.unwrap();
    assert!(pair.info().subject.contains("CN=tlskit"));
    assert!(pair.info().subject.contains("OU=Test"));
    assert!(pair.info().issuer.contains("O=Testing"));
    assert!(pair.info().not_before < pair.info().not_after);
    assert_eq!(pair.public_key_algorithm(), "1.2.840.113549.1.1.1");
    assert_eq!(pair.fingerprint_sha256().len(), 64);
}

#[tokio::test]
async fn certificate_read_failure_skips_key_read() {
    let reader = RecordingReader::new()
        .with_error("/testing.crt", "some error")
        .with_data("/testing.key", TESTING_KEY);
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let err = provider.x509_key_pair("testing").await.unwrap_err();
    assert!(err.to_string().contains("some error"));
    assert_eq!(err.path(), Some("/testing.crt"));
    assert_eq!(provider.reader().calls(), vec!["/testing.crt".to_string()]);
}

#[tokio::test]
async fn key_read_failure_is_reported() {
    let reader = RecordingReader::new()
        .with_data("/testing.crt", TESTING_CERTIFICATE)
        .with_error("/testing.key", "some error");
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let err = provider.x509_key_pair("testing").await.unwrap_err();
    assert!(err.to_string().contains("some error"));
    assert_eq!(err.path(), Some("/testing.key"));
}

#[tokio::test]
async fn mismatched_key_is_rejected() {
    let reader = RecordingReader::new()
        .with_data("/testing.crt", CERTIFICATE_AUTHORITY)
        .with_data("/testing.key", TESTING_KEY);
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let err = provider.x509_key_pair("testing").await.unwrap_err();
    assert!(matches!(err, Error::KeyPairParse { .. }));
    assert!(
        err.to_string().contains("private key does not match public key"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn garbage_key_is_rejected() {
    let reader = RecordingReader::new()
        .with_data("/testing.crt", TESTING_CERTIFICATE)
        .with_data("/testing.key", "not a key");
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let err = provider.x509_key_pair("testing").await.unwrap_err();
    assert!(err.to_string().contains("private key"), "unexpected error: {err}");
}

#[tokio::test]
async fn generated_ecdsa_pair_round_trips() {
    let pair = common::self_signed("tlskit ecdsa");
    let reader = RecordingReader::new()
        .with_data("/srv/tls/server.crt", pair.cert_pem)
        .with_data("/srv/tls/server.key", pair.key_pem);
    let provider = PathBasedProvider::new(reader, [base("/srv/tls")]);

    let loaded = provider.x509_key_pair("server").await.unwrap();
    assert!(loaded.info().subject.contains("CN=tlskit ecdsa"));
}

#[tokio::test]
async fn last_directive_wins() {
    let reader = RecordingReader::new().with_data("/b/ca.crt", CERTIFICATE_AUTHORITY);
    let provider = PathBasedProvider::new(reader, [base("/a"), base("/b")]);

    provider.ca_pem_certs("ca").await.unwrap();
    assert_eq!(provider.reader().calls(), vec!["/b/ca.crt".to_string()]);
}

#[tokio::test]
async fn provider_is_shareable_across_tasks() {
    let reader = RecordingReader::new().with_data("/ca.crt", CERTIFICATE_AUTHORITY);
    let provider = std::sync::Arc::new(PathBasedProvider::new(reader, DEFAULTS));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let provider = provider.clone();
            tokio::spawn(async move { provider.ca_pem_certs("ca").await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
    assert_eq!(provider.reader().calls().len(), 4);
}

#[tokio::test]
#[tracing_test::traced_test]
async fn read_failure_is_logged_with_path() {
    let reader = RecordingReader::new().with_error("/ca.crt", "backend down");
    let provider = PathBasedProvider::new(reader, DEFAULTS);

    let _ = provider.ca_pem_certs("ca").await;
    assert!(logs_contain("failed to read certificate material"));
    assert!(logs_contain("/ca.crt"));
}

proptest! {
    #[test]
    fn certificate_path_is_plain_join(
        base_path in "[a-z/:]{0,12}",
        separator in "[/:|]{0,2}",
        extension in "\\.[a-z]{0,4}",
        name in "[a-z0-9_.-]{0,12}",
    ) {
        let options = PathProviderOptions::default()
            .with_base_path(base_path.clone())
            .with_path_separator(separator.clone())
            .with_certificate_extension(extension.clone());

        prop_assert_eq!(
            options.certificate_path(&name),
            format!("{base_path}{separator}{name}{extension}")
        );
    }

    #[test]
    fn default_key_path_is_rooted(name in "[a-zA-Z0-9_-]{0,16}") {
        let options = PathProviderOptions::default();
        prop_assert_eq!(options.key_path(&name), format!("/{name}.key"));
        prop_assert_eq!(options.certificate_path(&name), format!("/{name}.crt"));
    }

    #[test]
    fn only_last_base_path_matters(first in "[a-z/]{0,8}", second in "[a-z/]{0,8}") {
        let options = PathProviderOptions::default()
            .apply([PathOption::BasePath(first), PathOption::BasePath(second.clone())]);
        prop_assert_eq!(options.certificate_path("ca"), format!("{second}/ca.crt"));
    }
}
