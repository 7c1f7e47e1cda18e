//! # Logging
//!
//! Installs the global `tracing` subscriber for the binary. The library
//! itself only emits events and never installs a subscriber.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install a fmt subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the level is `info`, or `debug` when `verbose` is set.
/// Logs go to stderr so command output on stdout stays clean. Calling this
/// when a subscriber is already installed is not an error.
pub fn init_logging(verbose: bool, json: bool) {
    let filter = default_filter(verbose);
    let builder = FmtSubscriber::builder().with_env_filter(filter).with_writer(std::io::stderr);

    let result = if json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    // Subscriber already set elsewhere (e.g. integration tests); keep it.
    if let Err(e) = result {
        tracing::debug!(error = %e, "global subscriber already installed");
    }
}

fn default_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}
