//! Output formatting for CLI commands

use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::utils::certificates::{CertificateInfo, CertificateKeyPair};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Unsupported output format: '{}'. Use 'json' or 'table'.", s),
        }
    }
}

/// Something the CLI can print.
pub trait Render: Serialize {
    /// Rows of (label, value) for table output.
    fn rows(&self) -> Vec<(String, String)>;
}

/// Print data in the specified format
pub fn print<T: Render>(data: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table => {
            print!("{}", render_table(&data.rows()));
            Ok(())
        }
    }
}

/// Print data as JSON
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data).context("Failed to serialize to JSON")?;
    println!("{}", json);
    Ok(())
}

fn render_table(rows: &[(String, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter().map(|(label, value)| format!("{label:<width$}  {value}\n")).collect()
}

#[derive(Debug, Serialize)]
pub struct ResolveView {
    pub name: String,
    pub source: String,
    pub certificate_path: String,
    pub key_path: String,
}

impl Render for ResolveView {
    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.name.clone()),
            ("Source".to_string(), self.source.clone()),
            ("Certificate".to_string(), self.certificate_path.clone()),
            ("Key".to_string(), self.key_path.clone()),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct CertificateView {
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
}

impl From<CertificateInfo> for CertificateView {
    fn from(info: CertificateInfo) -> Self {
        Self {
            subject: info.subject,
            issuer: info.issuer,
            not_before: info.not_before,
            not_after: info.not_after,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaBundleView {
    pub name: String,
    pub path: String,
    pub certificates: Vec<CertificateView>,
}

impl Render for CaBundleView {
    fn rows(&self) -> Vec<(String, String)> {
        let mut rows = vec![
            ("Name".to_string(), self.name.clone()),
            ("Path".to_string(), self.path.clone()),
            ("Certificates".to_string(), self.certificates.len().to_string()),
        ];
        for (index, cert) in self.certificates.iter().enumerate() {
            rows.push((format!("[{index}] Subject"), cert.subject.clone()));
            rows.push((format!("[{index}] Not after"), cert.not_after.to_rfc3339()));
        }
        rows
    }
}

#[derive(Debug, Serialize)]
pub struct KeyPairView {
    pub name: String,
    pub certificate_path: String,
    pub key_path: String,
    pub subject: String,
    pub issuer: String,
    pub not_before: DateTime<Utc>,
    pub not_after: DateTime<Utc>,
    pub chain_length: usize,
    pub public_key_algorithm: String,
    pub fingerprint_sha256: String,
}

impl KeyPairView {
    pub fn new(
        name: &str,
        certificate_path: String,
        key_path: String,
        pair: &CertificateKeyPair,
    ) -> Self {
        let info = pair.info();
        Self {
            name: name.to_string(),
            certificate_path,
            key_path,
            subject: info.subject.clone(),
            issuer: info.issuer.clone(),
            not_before: info.not_before,
            not_after: info.not_after,
            chain_length: pair.cert_chain().len(),
            public_key_algorithm: pair.public_key_algorithm().to_string(),
            fingerprint_sha256: pair.fingerprint_sha256(),
        }
    }
}

impl Render for KeyPairView {
    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Name".to_string(), self.name.clone()),
            ("Certificate".to_string(), self.certificate_path.clone()),
            ("Key".to_string(), self.key_path.clone()),
            ("Subject".to_string(), self.subject.clone()),
            ("Issuer".to_string(), self.issuer.clone()),
            ("Not before".to_string(), self.not_before.to_rfc3339()),
            ("Not after".to_string(), self.not_after.to_rfc3339()),
            ("Chain length".to_string(), self.chain_length.to_string()),
            ("Key algorithm".to_string(), self.public_key_algorithm.clone()),
            ("SHA-256".to_string(), self.fingerprint_sha256.clone()),
        ]
    }
}
