use tlskit::cli::run_cli;

fn install_rustls_provider() {
    use rustls::crypto::{ring, CryptoProvider};

    if CryptoProvider::get_default().is_none() {
        // Another provider may have been installed concurrently; either is fine.
        let _ = ring::default_provider().install_default();
    }
}

#[tokio::main]
async fn main() {
    install_rustls_provider();

    // Load .env file if it exists (optional - won't fail if missing)
    // This must happen before any config is read from environment
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    if let Err(e) = run_cli().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
