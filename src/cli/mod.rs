//! # Command Line Interface
//!
//! Inspect certificate material through the same resolution rules the
//! library uses: show resolved paths, load CA bundles and verify key pairs.

pub mod output;

use clap::{Parser, Subcommand};

use crate::config::{Config, SourceKind};
use crate::observability::init_logging;
use crate::provider::{CertificateAuthorityProvider, KeyPairProvider, PathOption};
use crate::utils::certificates::{certificate_info, parse_pem_certificates};

use output::{CaBundleView, CertificateView, KeyPairView, OutputFormat, ResolveView};

#[derive(Parser)]
#[command(name = "tlskit")]
#[command(about = "Load TLS certificate material by logical name")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Source to read from: local, env, vault, aws-secrets-manager, aws-ssm
    #[arg(long, global = true)]
    pub source: Option<String>,

    /// Prefix of every resolved path
    #[arg(long, global = true)]
    pub base_path: Option<String>,

    /// Separator between the base path and the name
    #[arg(long, global = true)]
    pub separator: Option<String>,

    /// Certificate file extension
    #[arg(long = "cert-ext", global = true)]
    pub certificate_extension: Option<String>,

    /// Private key file extension
    #[arg(long = "key-ext", global = true)]
    pub key_extension: Option<String>,

    /// Output format: table or json
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the paths a name resolves to, without reading anything
    Resolve {
        /// Logical name
        name: String,
    },

    /// Load a CA bundle
    Ca {
        /// Logical name
        name: String,

        /// Print the raw PEM instead of a summary
        #[arg(long)]
        pem: bool,
    },

    /// Load and verify a certificate/private key pair
    Keypair {
        /// Logical name
        name: String,
    },
}

impl Cli {
    /// Command line overrides, in the order they are applied on top of the
    /// environment configuration.
    fn path_overrides(&self) -> Vec<PathOption> {
        [
            self.base_path.clone().map(PathOption::BasePath),
            self.separator.clone().map(PathOption::PathSeparator),
            self.certificate_extension.clone().map(PathOption::CertificateExtension),
            self.key_extension.clone().map(PathOption::KeyExtension),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Merge the environment configuration with command line overrides.
    pub fn resolve_config(&self) -> crate::Result<Config> {
        let mut config = Config::from_env()?;
        if let Some(source) = &self.source {
            config.source.kind = source.parse::<SourceKind>()?;
        }
        config.paths = config.paths.apply(self.path_overrides());
        Ok(config)
    }
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let format: OutputFormat = cli.output.parse()?;
    let config = cli.resolve_config()?;

    match &cli.command {
        Commands::Resolve { name } => {
            let view = ResolveView {
                name: name.clone(),
                source: config.source.kind.to_string(),
                certificate_path: config.paths.certificate_path(name),
                key_path: config.paths.key_path(name),
            };
            output::print(&view, format)?;
        }
        Commands::Ca { name, pem } => {
            let provider = config.build_provider().await?;
            let bundle = provider.ca_pem_certs(name).await?;

            if *pem {
                print!("{}", String::from_utf8_lossy(&bundle));
                return Ok(());
            }

            let certificates = parse_pem_certificates(&bundle)?
                .iter()
                .map(|cert| certificate_info(cert).map(CertificateView::from))
                .collect::<Result<Vec<_>, _>>()?;

            let view = CaBundleView {
                name: name.clone(),
                path: config.paths.certificate_path(name),
                certificates,
            };
            output::print(&view, format)?;
        }
        Commands::Keypair { name } => {
            let provider = config.build_provider().await?;
            let pair = provider.x509_key_pair(name).await?;

            let view = KeyPairView::new(
                name,
                config.paths.certificate_path(name),
                config.paths.key_path(name),
                &pair,
            );
            output::print(&view, format)?;
        }
    }

    Ok(())
}
