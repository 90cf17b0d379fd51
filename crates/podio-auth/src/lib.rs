//! # podio-auth
//!
//! Podio authentication: credentials and the OAuth 2.0 refresh-token grant.
//!
//! ## Security
//!
//! - Tokens and client secrets are redacted in Debug output
//! - Tracing skips credential parameters
//! - Error messages sanitize any credential data
//!
//! The refresh flow is standalone: it never touches a [`podio_client::PodioClient`].
//! Callers hand the new access token to the client themselves with
//! `PodioClient::set_token`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use podio_auth::{OAuthClient, OAuthConfig, PodioCredentials};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), podio_auth::Error> {
//!     let creds = PodioCredentials::from_env()?;
//!     let oauth = OAuthClient::new(OAuthConfig::from_env()?)?;
//!
//!     let refresh_token = creds.refresh_token().expect("PODIO_REFRESH_TOKEN");
//!     let token = oauth
//!         .refresh_token(refresh_token, podio_client::DEFAULT_BASE_URL)
//!         .await?;
//!
//!     let creds = token.to_credentials();
//!     println!("expires at {:?}", creds.expires_at());
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod oauth;

pub use credentials::PodioCredentials;
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, OAuthConfig, TokenResponse};

/// Path of the refresh-token grant, relative to the API root.
pub const TOKEN_PATH: &str = "/oauth/token/v2";
