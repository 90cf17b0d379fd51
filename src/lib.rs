//! # podio-api
//!
//! A Podio API client library for Rust.
//!
//! Build a request with one of the endpoint builders, send it with a verb,
//! and get back an [`ApiResponse`](client::ApiResponse) that holds either
//! the JSON data or an error, plus the rate-limit counters Podio reported.
//!
//! ## Security
//!
//! - Tokens and client secrets are redacted in Debug output
//! - Tracing skips credential parameters and request bodies
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **podio-client** - Core HTTP client, error taxonomy and the result envelope
//! - **podio-auth** - Credentials from the environment, OAuth 2.0 refresh-token flow
//! - **podio-rest** - Item, app, organization, space and hook endpoint builders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use podio_api::{PodioCredentials, PodioRestClient, SearchOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = PodioCredentials::from_env()?;
//!     let client = PodioRestClient::new(creds.access_token())?;
//!
//!     let response = client
//!         .search_in_app(28578294, &SearchOptions::new("Alamo").ref_type("item").limit(50))?
//!         .get()
//!         .await;
//!
//!     match response.error() {
//!         Some(err) => eprintln!("search failed: {err}"),
//!         None => println!("{}", response.data().unwrap()),
//!     }
//!     println!("calls left: {:?}", response.remaining_limit());
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use podio_auth as auth;
#[cfg(feature = "client")]
pub use podio_client as client;
#[cfg(feature = "rest")]
pub use podio_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use podio_auth::{OAuthClient, OAuthConfig, PodioCredentials, TokenResponse};
#[cfg(feature = "client")]
pub use podio_client::{ApiResponse, ClientConfig, PodioClient, RateLimit};
#[cfg(feature = "rest")]
pub use podio_rest::{
    CountOptions, FilterOptions, HookRef, PendingRequest, PodioRequest, PodioRestClient,
    SearchOptions,
};
