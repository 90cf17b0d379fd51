//! # podio-client
//!
//! Core HTTP client infrastructure for the Podio API.
//!
//! This crate provides the foundational HTTP client with:
//! - `Authorization: OAuth2 <token>` authentication
//! - Compression support (gzip, deflate)
//! - Rate limit header reporting (`X-Rate-Limit-Remaining` / `X-Rate-Limit-Limit`)
//! - A settled result envelope that never surfaces a bare error
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (podio-rest endpoint builders, podio-auth token refresh)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PodioClient                            │
//! │  - Holds the access token + HTTP client                     │
//! │  - GET / POST / PUT / DELETE executors → ApiResponse        │
//! │  - Handles authentication headers                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PodioHttpClient                          │
//! │  - Raw HTTP with compression                                │
//! │  - Error body parsing and sanitizing                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use podio_client::PodioClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), podio_client::Error> {
//!     let client = PodioClient::new(std::env::var("PODIO_OAUTH_TOKEN").unwrap())?;
//!
//!     let orgs = client.get_json("/org/").await;
//!     println!("{:?} (calls left: {:?})", orgs.data(), orgs.remaining_limit());
//!
//!     let created = client
//!         .post_json("/item/app/28578294/", &serde_json::json!({"fields": {"title": "X"}}))
//!         .await
//!         .into_result()?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod podio_client;
mod request;
mod response;
pub mod security;

pub use client::PodioHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use envelope::ApiResponse;
pub use error::{Error, ErrorKind, Result};
pub use podio_client::PodioClient;
pub use request::{RequestBuilder, RequestMethod};
pub use response::{
    sanitize_error_message, RateLimit, Response, ResponseExt, RATE_LIMIT_LIMIT_HEADER,
    RATE_LIMIT_REMAINING_HEADER,
};

/// Root of the public Podio API.
pub const DEFAULT_BASE_URL: &str = "https://api.podio.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("podio-api/", env!("CARGO_PKG_VERSION"));
