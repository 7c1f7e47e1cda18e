use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};
use ring::signature::{
    EcdsaKeyPair, Ed25519KeyPair, KeyPair, ECDSA_P256_SHA256_ASN1_SIGNING,
    ECDSA_P384_SHA384_ASN1_SIGNING,
};
use ring::{digest, rand::SystemRandom};
use rustls::pki_types::{pem::PemObject, CertificateDer, PrivateKeyDer};
use serde::Serialize;
use simple_asn1::{ASN1Block, ASN1Class, BigInt, OID};

use crate::errors::KeyPairError;

const OID_RSA_ENCRYPTION: &str = "1.2.840.113549.1.1.1";
const OID_EC_PUBLIC_KEY: &str = "1.2.840.10045.2.1";
const OID_ED25519: &str = "1.3.101.112";

/// Metadata extracted from the leaf certificate for logging and display.
///
/// Purely informational: nothing here is checked against the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateInfo {
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

/// A parsed certificate chain together with the private key for its leaf.
///
/// Only produced by [`parse_x509_key_pair`], so the key is known to match the
/// leaf's public key.
#[derive(Debug)]
pub struct CertificateKeyPair {
    chain: Vec<CertificateDer<'static>>,
    private_key: PrivateKeyDer<'static>,
    info: CertificateInfo,
    public_key_algorithm: String,
}

impl CertificateKeyPair {
    /// The leaf certificate.
    pub fn leaf(&self) -> &CertificateDer<'static> {
        &self.chain[0]
    }

    /// Certificates following the leaf in the PEM data.
    pub fn intermediates(&self) -> &[CertificateDer<'static>] {
        &self.chain[1..]
    }

    /// The full chain, leaf first.
    pub fn cert_chain(&self) -> &[CertificateDer<'static>] {
        &self.chain
    }

    pub fn private_key(&self) -> &PrivateKeyDer<'static> {
        &self.private_key
    }

    pub fn info(&self) -> &CertificateInfo {
        &self.info
    }

    /// Dotted OID of the leaf's public key algorithm.
    pub fn public_key_algorithm(&self) -> &str {
        &self.public_key_algorithm
    }

    /// SHA-256 over the DER encoding of the leaf, hex encoded.
    pub fn fingerprint_sha256(&self) -> String {
        hex::encode(digest::digest(&digest::SHA256, self.leaf().as_ref()))
    }

    /// Split into the chain and key, e.g. for `rustls::ConfigBuilder::with_single_cert`.
    pub fn into_parts(self) -> (Vec<CertificateDer<'static>>, PrivateKeyDer<'static>) {
        (self.chain, self.private_key)
    }
}

impl Clone for CertificateKeyPair {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            private_key: self.private_key.clone_key(),
            info: self.info.clone(),
            public_key_algorithm: self.public_key_algorithm.clone(),
        }
    }
}

/// Decode every certificate in a PEM bundle. Non-certificate sections are skipped.
pub fn parse_pem_certificates(pem: &[u8]) -> Result<Vec<CertificateDer<'static>>, KeyPairError> {
    CertificateDer::pem_slice_iter(pem)
        .map(|result| result.map_err(|err| KeyPairError::InvalidCertificatePem { source: anyhow!(err) }))
        .collect()
}

/// Parse a PEM certificate chain and PEM private key into a verified pair.
///
/// The first certificate is the leaf; its public key must match the private
/// key. RSA (PKCS#1 or PKCS#8, any size), ECDSA on any named curve (SEC1 or
/// PKCS#8) and Ed25519 keys are supported. Other algorithms are rejected as
/// unsupported rather than reported as a mismatch.
pub fn parse_x509_key_pair(
    cert_pem: &[u8],
    key_pem: &[u8],
) -> Result<CertificateKeyPair, KeyPairError> {
    let chain = parse_pem_certificates(cert_pem)?;
    if chain.is_empty() {
        return Err(KeyPairError::EmptyCertificateChain);
    }

    let private_key = PrivateKeyDer::from_pem_slice(key_pem)
        .map_err(|err| KeyPairError::InvalidPrivateKey { source: Some(anyhow!(err)) })?;

    let parsed = parse_certificate_metadata(&chain[0])?;
    enforce_public_key_match(&parsed.algorithm_oid, &parsed.public_key, &private_key)?;

    Ok(CertificateKeyPair {
        chain,
        private_key,
        info: parsed.info,
        public_key_algorithm: parsed.algorithm_oid,
    })
}

/// Subject, issuer and validity window of a single certificate.
pub fn certificate_info(cert: &CertificateDer<'_>) -> Result<CertificateInfo, KeyPairError> {
    parse_certificate_metadata(cert).map(|parsed| parsed.info)
}

struct ParsedCertificate {
    info: CertificateInfo,
    algorithm_oid: String,
    public_key: Vec<u8>,
}

fn metadata_error(message: &'static str) -> KeyPairError {
    KeyPairError::CertificateMetadata { source: anyhow!(message) }
}

fn parse_certificate_metadata(cert: &CertificateDer<'_>) -> Result<ParsedCertificate, KeyPairError> {
    let blocks = simple_asn1::from_der(cert.as_ref())
        .map_err(|err| KeyPairError::CertificateMetadata { source: anyhow!(err) })?;

    let cert_seq = match blocks.first() {
        Some(ASN1Block::Sequence(_, items)) => items,
        _ => return Err(metadata_error("certificate missing outer sequence")),
    };

    let tbs_seq = match cert_seq.first() {
        Some(ASN1Block::Sequence(_, items)) => items,
        _ => return Err(metadata_error("certificate missing tbsCertificate")),
    };

    let mut fields = tbs_seq.iter().peekable();

    // [0] EXPLICIT Version is optional
    if let Some(ASN1Block::Explicit(ASN1Class::ContextSpecific, _, tag, _)) = fields.peek() {
        if tag != &0u8.into() {
            return Err(metadata_error("unexpected context-specific field before serial number"));
        }
        fields.next();
    }

    // serial number, signature algorithm
    fields.next();
    fields.next();

    let issuer_block = fields.next().ok_or_else(|| metadata_error("certificate missing issuer"))?;
    let validity_block =
        fields.next().ok_or_else(|| metadata_error("certificate missing validity"))?;
    let subject_block =
        fields.next().ok_or_else(|| metadata_error("certificate missing subject"))?;
    let spki_block =
        fields.next().ok_or_else(|| metadata_error("certificate missing subjectPublicKeyInfo"))?;

    let issuer = parse_name(issuer_block)?;
    let subject = parse_name(subject_block)?;
    let (not_before, not_after) = parse_validity(validity_block)?;
    let public_info = parse_public_key_info(spki_block)?;

    Ok(ParsedCertificate {
        info: CertificateInfo { subject, issuer, not_before, not_after },
        algorithm_oid: public_info.algorithm_oid,
        public_key: public_info.public_key,
    })
}

struct PublicKeyInfo {
    algorithm_oid: String,
    public_key: Vec<u8>,
}

fn parse_public_key_info(block: &ASN1Block) -> Result<PublicKeyInfo, KeyPairError> {
    let items = match block {
        ASN1Block::Sequence(_, items) if items.len() >= 2 => items,
        ASN1Block::Sequence(..) => return Err(metadata_error("subjectPublicKeyInfo missing fields")),
        _ => return Err(metadata_error("subjectPublicKeyInfo is not a sequence")),
    };

    let algorithm_oid = match &items[0] {
        ASN1Block::Sequence(_, seq) => match seq.first() {
            Some(ASN1Block::ObjectIdentifier(_, oid)) => oid_to_string(oid),
            _ => return Err(metadata_error("algorithm identifier missing OID")),
        },
        _ => return Err(metadata_error("algorithm identifier missing")),
    };

    let (bit_len, public_key) = match &items[1] {
        ASN1Block::BitString(_, nbits, bytes) => (*nbits, bytes.clone()),
        _ => return Err(metadata_error("subject public key is not a bit string")),
    };

    if bit_len % 8 != 0 || public_key.len() * 8 != bit_len {
        return Err(metadata_error("subject public key contains unused bits"));
    }

    Ok(PublicKeyInfo { algorithm_oid, public_key })
}

fn parse_name(block: &ASN1Block) -> Result<String, KeyPairError> {
    let rdns = match block {
        ASN1Block::Sequence(_, items) => items,
        _ => return Err(metadata_error("name is not a sequence")),
    };

    let mut components = Vec::new();
    for rdn in rdns {
        let ASN1Block::Set(_, set_items) = rdn else {
            continue;
        };

        for attr in set_items {
            let ASN1Block::Sequence(_, attr_items) = attr else {
                continue;
            };
            if let [ASN1Block::ObjectIdentifier(_, oid), value, ..] = attr_items.as_slice() {
                if let Some(value) = extract_string_value(value) {
                    let oid_string = oid_to_string(oid);
                    let short = match oid_string.as_str() {
                        "2.5.4.3" => "CN",
                        "2.5.4.6" => "C",
                        "2.5.4.7" => "L",
                        "2.5.4.8" => "ST",
                        "2.5.4.10" => "O",
                        "2.5.4.11" => "OU",
                        other => other,
                    };
                    components.push(format!("{short}={value}"));
                }
            }
        }
    }

    Ok(components.join(", "))
}

fn extract_string_value(block: &ASN1Block) -> Option<String> {
    match block {
        ASN1Block::UTF8String(_, value)
        | ASN1Block::PrintableString(_, value)
        | ASN1Block::IA5String(_, value)
        | ASN1Block::TeletexString(_, value)
        | ASN1Block::UniversalString(_, value)
        | ASN1Block::BMPString(_, value) => Some(value.clone()),
        _ => None,
    }
}

fn parse_validity(block: &ASN1Block) -> Result<(DateTime<Utc>, DateTime<Utc>), KeyPairError> {
    match block {
        ASN1Block::Sequence(_, entries) if entries.len() >= 2 => {
            Ok((time_block_to_chrono(&entries[0])?, time_block_to_chrono(&entries[1])?))
        }
        ASN1Block::Sequence(..) => Err(metadata_error("validity sequence missing entries")),
        _ => Err(metadata_error("validity is not a sequence")),
    }
}

fn time_block_to_chrono(block: &ASN1Block) -> Result<DateTime<Utc>, KeyPairError> {
    let primitive = match block {
        ASN1Block::UTCTime(_, value) | ASN1Block::GeneralizedTime(_, value) => value,
        _ => return Err(metadata_error("time value not in expected format")),
    };

    let dt = primitive.assume_utc();
    Utc.timestamp_opt(dt.unix_timestamp(), dt.nanosecond())
        .single()
        .ok_or_else(|| metadata_error("failed to convert certificate time"))
}

/// Public key material in a form comparable across certificate and private key
/// encodings.
#[derive(Debug, PartialEq, Eq)]
enum PublicKeyMaterial {
    Rsa { modulus: Vec<u8>, exponent: Vec<u8> },
    Ec { point: Vec<u8> },
    Ed25519 { key: Vec<u8> },
}

fn enforce_public_key_match(
    algorithm_oid: &str,
    public_key: &[u8],
    private_key: &PrivateKeyDer<'static>,
) -> Result<(), KeyPairError> {
    let expected = certificate_public_key(algorithm_oid, public_key)?;
    let actual = private_key_public_key(private_key)?;

    if expected == actual {
        Ok(())
    } else {
        Err(KeyPairError::CertificateKeyMismatch)
    }
}

fn certificate_public_key(
    algorithm_oid: &str,
    public_key: &[u8],
) -> Result<PublicKeyMaterial, KeyPairError> {
    match algorithm_oid {
        OID_RSA_ENCRYPTION => {
            let (modulus, exponent) = rsa_modulus_and_exponent(public_key)
                .map_err(|source| KeyPairError::CertificateMetadata { source })?;
            Ok(PublicKeyMaterial::Rsa { modulus, exponent })
        }
        OID_EC_PUBLIC_KEY => Ok(PublicKeyMaterial::Ec { point: public_key.to_vec() }),
        OID_ED25519 => Ok(PublicKeyMaterial::Ed25519 { key: public_key.to_vec() }),
        other => Err(KeyPairError::UnsupportedKeyAlgorithm { oid: other.to_string() }),
    }
}

fn private_key_public_key(
    private_key: &PrivateKeyDer<'static>,
) -> Result<PublicKeyMaterial, KeyPairError> {
    let der = private_key.secret_der();
    let material = match private_key {
        PrivateKeyDer::Pkcs1(_) => rsa_private_key_public(der),
        PrivateKeyDer::Sec1(_) => ec_private_key_point(der).and_then(|point| {
            point
                .map(|point| PublicKeyMaterial::Ec { point })
                .ok_or_else(|| anyhow!("EC private key does not embed its public key"))
        }),
        PrivateKeyDer::Pkcs8(_) => return pkcs8_public_key(der),
        _ => Err(anyhow!("unsupported private key encoding")),
    };

    material.map_err(|source| KeyPairError::InvalidPrivateKey { source: Some(source) })
}

fn der_sequence(der: &[u8]) -> Result<Vec<ASN1Block>, anyhow::Error> {
    match simple_asn1::from_der(der)?.into_iter().next() {
        Some(ASN1Block::Sequence(_, items)) => Ok(items),
        _ => Err(anyhow!("expected a DER sequence")),
    }
}

/// PKCS#1 RSAPrivateKey: version, modulus, publicExponent, ...
fn rsa_private_key_public(der: &[u8]) -> Result<PublicKeyMaterial, anyhow::Error> {
    match der_sequence(der)?.as_slice() {
        [ASN1Block::Integer(..), ASN1Block::Integer(_, modulus), ASN1Block::Integer(_, exponent), ..] => {
            Ok(PublicKeyMaterial::Rsa {
                modulus: bigint_to_bytes(modulus),
                exponent: bigint_to_bytes(exponent),
            })
        }
        _ => Err(anyhow!("RSA private key missing modulus/exponent")),
    }
}

/// SEC1 ECPrivateKey: the optional `[1] publicKey` point, if present.
fn ec_private_key_point(der: &[u8]) -> Result<Option<Vec<u8>>, anyhow::Error> {
    let items = der_sequence(der)?;
    if !matches!(items.as_slice(), [ASN1Block::Integer(..), ASN1Block::OctetString(..), ..]) {
        return Err(anyhow!("EC private key is malformed"));
    }

    Ok(items.iter().find_map(|item| match item {
        ASN1Block::Explicit(ASN1Class::ContextSpecific, _, tag, inner) if tag == &1u8.into() => {
            match inner.as_ref() {
                ASN1Block::BitString(_, _, point) => Some(point.clone()),
                _ => None,
            }
        }
        _ => None,
    }))
}

/// PKCS#8 v2 `[1] publicKey`, implicitly or explicitly tagged.
fn pkcs8_embedded_public_key(items: &[ASN1Block]) -> Option<Vec<u8>> {
    items.iter().find_map(|item| match item {
        ASN1Block::Unknown(ASN1Class::ContextSpecific, false, _, tag, bytes)
            if tag == &1u8.into() =>
        {
            match bytes.split_first() {
                Some((&0, key)) => Some(key.to_vec()),
                _ => None,
            }
        }
        ASN1Block::Explicit(ASN1Class::ContextSpecific, _, tag, inner) if tag == &1u8.into() => {
            match inner.as_ref() {
                ASN1Block::BitString(_, _, key) => Some(key.clone()),
                _ => None,
            }
        }
        _ => None,
    })
}

fn pkcs8_public_key(der: &[u8]) -> Result<PublicKeyMaterial, KeyPairError> {
    let invalid = |source: anyhow::Error| KeyPairError::InvalidPrivateKey { source: Some(source) };

    let items = der_sequence(der).map_err(invalid)?;
    let (algorithm_oid, inner) = match items.as_slice() {
        [ASN1Block::Integer(..), ASN1Block::Sequence(_, algorithm), ASN1Block::OctetString(_, inner), ..] => {
            match algorithm.first() {
                Some(ASN1Block::ObjectIdentifier(_, oid)) => (oid_to_string(oid), inner),
                _ => return Err(invalid(anyhow!("PKCS#8 algorithm identifier missing OID"))),
            }
        }
        _ => return Err(invalid(anyhow!("PKCS#8 private key is malformed"))),
    };

    match algorithm_oid.as_str() {
        OID_RSA_ENCRYPTION => rsa_private_key_public(inner).map_err(invalid),
        OID_EC_PUBLIC_KEY => {
            let point = ec_private_key_point(inner)
                .map_err(invalid)?
                .or_else(|| pkcs8_embedded_public_key(&items))
                .or_else(|| ecdsa_public_key_from_pkcs8(der))
                .ok_or_else(|| invalid(anyhow!("EC private key does not embed its public key")))?;
            Ok(PublicKeyMaterial::Ec { point })
        }
        OID_ED25519 => {
            let key = match pkcs8_embedded_public_key(&items) {
                Some(key) => key,
                None => ed25519_public_key_from_seed(inner).map_err(invalid)?,
            };
            Ok(PublicKeyMaterial::Ed25519 { key })
        }
        other => Err(KeyPairError::UnsupportedKeyAlgorithm { oid: other.to_string() }),
    }
}

/// Derive the point for P-256/P-384 keys that omit it.
fn ecdsa_public_key_from_pkcs8(der: &[u8]) -> Option<Vec<u8>> {
    let rng = SystemRandom::new();
    [&ECDSA_P256_SHA256_ASN1_SIGNING, &ECDSA_P384_SHA384_ASN1_SIGNING].into_iter().find_map(
        |algorithm| {
            EcdsaKeyPair::from_pkcs8(algorithm, der, &rng)
                .ok()
                .map(|key_pair| key_pair.public_key().as_ref().to_vec())
        },
    )
}

/// RFC 8410 CurvePrivateKey: an OCTET STRING holding the 32 byte seed.
fn ed25519_public_key_from_seed(inner: &[u8]) -> Result<Vec<u8>, anyhow::Error> {
    let seed = match simple_asn1::from_der(inner)?.into_iter().next() {
        Some(ASN1Block::OctetString(_, seed)) => seed,
        _ => return Err(anyhow!("Ed25519 private key is not an octet string")),
    };
    let key_pair = Ed25519KeyPair::from_seed_unchecked(&seed)
        .map_err(|e| anyhow!("invalid Ed25519 seed: {e}"))?;
    Ok(key_pair.public_key().as_ref().to_vec())
}

fn rsa_modulus_and_exponent(der: &[u8]) -> Result<(Vec<u8>, Vec<u8>), anyhow::Error> {
    match der_sequence(der)?.as_slice() {
        [ASN1Block::Integer(_, modulus), ASN1Block::Integer(_, exponent), ..] => {
            Ok((bigint_to_bytes(modulus), bigint_to_bytes(exponent)))
        }
        _ => Err(anyhow!("RSA public key missing modulus/exponent")),
    }
}

fn bigint_to_bytes(value: &BigInt) -> Vec<u8> {
    value.to_biguint().map_or_else(Vec::new, |v| v.to_bytes_be())
}

fn oid_to_string(oid: &OID) -> String {
    oid.as_vec::<u64>()
        .map(|components| {
            components.into_iter().map(|n| n.to_string()).collect::<Vec<_>>().join(".")
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generated_pair() -> (String, String) {
        let certified = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
        (certified.cert.pem(), certified.key_pair.serialize_pem())
    }

    fn generated_pair_for(alg: &'static rcgen::SignatureAlgorithm) -> (String, String) {
        let key_pair = rcgen::KeyPair::generate_for(alg).unwrap();
        let cert = rcgen::CertificateParams::new(vec!["localhost".to_string()])
            .unwrap()
            .self_signed(&key_pair)
            .unwrap();
        (cert.pem(), key_pair.serialize_pem())
    }

    #[test]
    fn test_ecdsa_pair_round_trip() {
        let (cert, key) = generated_pair();
        let pair = parse_x509_key_pair(cert.as_bytes(), key.as_bytes()).unwrap();

        assert_eq!(pair.public_key_algorithm(), OID_EC_PUBLIC_KEY);
        assert!(pair.intermediates().is_empty());
        assert_eq!(pair.cert_chain().len(), 1);
        assert!(!pair.leaf().as_ref().is_empty());
        assert!(pair.info().not_before < pair.info().not_after);
        assert_eq!(pair.fingerprint_sha256().len(), 64);
    }

    #[test]
    fn test_ecdsa_mismatch() {
        let (cert, _) = generated_pair();
        let (_, other_key) = generated_pair();
        let err = parse_x509_key_pair(cert.as_bytes(), other_key.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::CertificateKeyMismatch));
    }

    #[test]
    fn test_ed25519_pair_round_trip() {
        let (cert, key) = generated_pair_for(&rcgen::PKCS_ED25519);
        let pair = parse_x509_key_pair(cert.as_bytes(), key.as_bytes()).unwrap();
        assert_eq!(pair.public_key_algorithm(), OID_ED25519);

        let (_, other_key) = generated_pair_for(&rcgen::PKCS_ED25519);
        let err = parse_x509_key_pair(cert.as_bytes(), other_key.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::CertificateKeyMismatch));
    }

    #[test]
    fn test_p384_pair_round_trip() {
        let (cert, key) = generated_pair_for(&rcgen::PKCS_ECDSA_P384_SHA384);
        let pair = parse_x509_key_pair(cert.as_bytes(), key.as_bytes()).unwrap();
        assert_eq!(pair.public_key_algorithm(), OID_EC_PUBLIC_KEY);
    }

    #[test]
    fn test_key_of_another_algorithm_is_a_mismatch() {
        let (ec_cert, _) = generated_pair();
        let (_, ed_key) = generated_pair_for(&rcgen::PKCS_ED25519);
        let err = parse_x509_key_pair(ec_cert.as_bytes(), ed_key.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::CertificateKeyMismatch));

        let (ed_cert, _) = generated_pair_for(&rcgen::PKCS_ED25519);
        let (_, ec_key) = generated_pair_for(&rcgen::PKCS_ECDSA_P384_SHA384);
        let err = parse_x509_key_pair(ed_cert.as_bytes(), ec_key.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::CertificateKeyMismatch));
    }

    #[test]
    fn test_certificate_public_key_rejects_unknown_algorithm() {
        let err = certificate_public_key("1.3.101.113", &[0u8; 57]).unwrap_err();
        assert!(matches!(err, KeyPairError::UnsupportedKeyAlgorithm { ref oid } if oid == "1.3.101.113"));
    }

    #[test]
    fn test_malformed_sec1_key_is_invalid_not_mismatch() {
        let key = PrivateKeyDer::Sec1(b"\x30\x03\x02\x01\x01".to_vec().into());
        let err = private_key_public_key(&key).unwrap_err();
        assert!(matches!(err, KeyPairError::InvalidPrivateKey { .. }));
    }

    #[test]
    fn test_chain_keeps_intermediates_in_order() {
        let (cert, key) = generated_pair();
        let (other_cert, _) = generated_pair();
        let bundle = format!("{cert}\n{other_cert}");

        let pair = parse_x509_key_pair(bundle.as_bytes(), key.as_bytes()).unwrap();
        assert_eq!(pair.intermediates().len(), 1);

        let (chain, _key) = pair.clone().into_parts();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain[0], *pair.leaf());
    }

    #[test]
    fn test_empty_certificate_data() {
        let (_, key) = generated_pair();
        let err = parse_x509_key_pair(b"not a pem", key.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::EmptyCertificateChain));
    }

    #[test]
    fn test_missing_private_key() {
        let (cert, _) = generated_pair();
        let err = parse_x509_key_pair(cert.as_bytes(), cert.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyPairError::InvalidPrivateKey { .. }));
    }

    #[test]
    fn test_parse_pem_certificates_skips_other_sections() {
        let (cert, key) = generated_pair();
        let (other_cert, _) = generated_pair();
        let bundle = format!("{cert}\n{key}\n{other_cert}");

        let certs = parse_pem_certificates(bundle.as_bytes()).unwrap();
        assert_eq!(certs.len(), 2);
        assert!(parse_pem_certificates(b"").unwrap().is_empty());
    }

    #[test]
    fn test_certificate_info_matches_pair_info() {
        let (cert, key) = generated_pair();
        let pair = parse_x509_key_pair(cert.as_bytes(), key.as_bytes()).unwrap();
        assert_eq!(&certificate_info(pair.leaf()).unwrap(), pair.info());
    }

    #[test]
    fn test_oid_strings() {
        let oid = simple_asn1::oid!(1, 2, 840, 113549, 1, 1, 1);
        assert_eq!(oid_to_string(&oid), OID_RSA_ENCRYPTION);
    }
}
