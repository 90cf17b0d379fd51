//! # podio-rest
//!
//! Endpoint builders for the Podio REST API.
//!
//! ## Features
//!
//! - **Items** - Create, update, delete, fetch (by id, external id or v2 values)
//! - **Filter / Search / Count** - Item filtering, full-text search within an app, counts
//! - **Apps** - List, fetch, list by space
//! - **Organizations and Spaces** - List organizations, list spaces of an organization
//! - **Hooks** - Create, validate, request verification, list, delete
//!
//! Every builder returns a [`PendingRequest`] holding an immutable
//! [`PodioRequest`]. Await one of its verb methods to send it; every call
//! settles into a [`podio_client::ApiResponse`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use podio_rest::{FilterOptions, HookRef, PodioRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), podio_rest::Error> {
//!     let client = PodioRestClient::new(std::env::var("PODIO_OAUTH_TOKEN").unwrap())?;
//!
//!     // Filter
//!     let page = client
//!         .filter_items(28578294, &FilterOptions::new().sort_by("created_on").limit(10))
//!         .post()
//!         .await;
//!     println!("{:?} (calls left: {:?})", page.data(), page.remaining_limit());
//!
//!     // Update
//!     let updated = client
//!         .update_item(1234, serde_json::json!({"status": "done"}))
//!         .put()
//!         .await;
//!
//!     // Hooks
//!     let hooks = client.get_hooks(HookRef::App(28578294)).get().await;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod hook;
mod item;
mod request;

pub use client::{PendingRequest, PodioRestClient};
pub use error::{Error, ErrorKind, Result};
pub use hook::{CreateHookPayload, HookRef, ValidateHookPayload};
pub use item::{
    CountOptions, FilterOptions, FilterPayload, ItemPayload, SearchOptions, DEFAULT_FILTER_LIMIT,
};
pub use request::{PodioRequest, RequestPayload};

// Re-export the envelope so callers need only this crate.
pub use podio_client::{ApiResponse, RateLimit};
