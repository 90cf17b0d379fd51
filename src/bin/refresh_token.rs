//! Exchange a Podio refresh token for a new access token.
//!
//! ```sh
//! export PODIO_CLIENT_ID=... PODIO_CLIENT_SECRET=... PODIO_REFRESH_TOKEN=...
//! cargo run --bin podio-refresh-token
//! ```
//!
//! Prints the expiry and an `export` line for the new token. `PODIO_API_URL`
//! overrides the API root.

use podio_auth::{OAuthClient, OAuthConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = OAuthConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Set PODIO_CLIENT_ID and PODIO_CLIENT_SECRET to your API key pair.");
        std::process::exit(1);
    });

    let refresh_token = std::env::var("PODIO_REFRESH_TOKEN").unwrap_or_else(|_| {
        eprintln!("Error: PODIO_REFRESH_TOKEN environment variable is not set.");
        std::process::exit(1);
    });

    let api_url = std::env::var("PODIO_API_URL")
        .unwrap_or_else(|_| podio_client::DEFAULT_BASE_URL.to_string());

    let client = OAuthClient::new(config).unwrap_or_else(|e| {
        eprintln!("Error: Failed to build HTTP client: {e}");
        std::process::exit(1);
    });

    let token = client
        .refresh_token(&refresh_token, &api_url)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Token refresh failed: {e}");
            std::process::exit(1);
        });

    let creds = token.to_credentials();
    match creds.expires_at() {
        Some(at) => eprintln!("Access token valid until {}", at.to_rfc3339()),
        None => eprintln!("Access token refreshed (no expiry reported)"),
    }

    println!("export PODIO_OAUTH_TOKEN={}", creds.access_token());
    if let Some(rt) = creds.refresh_token() {
        println!("export PODIO_REFRESH_TOKEN={rt}");
    }
}
