//! Podio REST API client.
//!
//! This client wraps `PodioClient` from `podio-client`. Endpoint builders
//! live in one submodule per resource family and return a
//! [`PendingRequest`] that can be executed with any of the four verbs.

use podio_client::{ApiResponse, ClientConfig, PodioClient, RequestMethod};
use tracing::instrument;

use crate::error::Result;
use crate::request::{PodioRequest, RequestPayload};

mod apps;
mod hooks;
mod items;
mod orgs;

/// Podio REST API client.
///
/// Builders are pure: they only compute a URL and a payload. Nothing is
/// sent until one of the verb methods is awaited.
///
/// # Example
///
/// ```rust,ignore
/// use podio_rest::{PodioRestClient, SearchOptions};
///
/// let client = PodioRestClient::new("access_token_here")?;
///
/// let item = client.get_item(1234).get().await;
///
/// let hits = client
///     .search_in_app(28578294, &SearchOptions::new("Alamo").limit(50))?
///     .get()
///     .await;
///
/// let created = client
///     .add_item(28578294, serde_json::json!({"title": "New"}), Some("ext-1"))
///     .post()
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct PodioRestClient {
    client: PodioClient,
}

impl PodioRestClient {
    /// Create a new REST client against the public Podio API.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let client = PodioClient::new(access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = PodioClient::with_config(access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from an existing PodioClient.
    pub fn from_client(client: PodioClient) -> Self {
        Self { client }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Result<Self> {
        let client = self.client.with_base_url(base_url)?;
        Ok(Self { client })
    }

    /// Get the underlying PodioClient.
    pub fn inner(&self) -> &PodioClient {
        &self.client
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Replace the access token (e.g. after a refresh).
    pub fn set_token(&mut self, access_token: impl Into<String>) {
        self.client.set_token(access_token);
    }

    // =========================================================================
    // Executors
    // =========================================================================

    /// Send `request` with `method` and settle the outcome.
    #[instrument(skip(self, request), fields(endpoint = %request.endpoint()))]
    pub async fn execute(&self, method: RequestMethod, request: &PodioRequest) -> ApiResponse {
        let body = match request.body() {
            Ok(body) => body,
            Err(err) => return ApiResponse::from_error(err),
        };

        self.client.send(method, request.endpoint(), body).await
    }

    /// GET `request`; any payload is ignored.
    pub async fn get(&self, request: &PodioRequest) -> ApiResponse {
        self.execute(RequestMethod::Get, request).await
    }

    /// POST `request` with its payload as the JSON body.
    pub async fn post(&self, request: &PodioRequest) -> ApiResponse {
        self.execute(RequestMethod::Post, request).await
    }

    /// PUT `request` with its payload as the JSON body.
    pub async fn put(&self, request: &PodioRequest) -> ApiResponse {
        self.execute(RequestMethod::Put, request).await
    }

    /// DELETE `request`; any payload is ignored.
    pub async fn delete(&self, request: &PodioRequest) -> ApiResponse {
        self.execute(RequestMethod::Delete, request).await
    }

    // =========================================================================
    // Descriptor helpers
    // =========================================================================

    fn pending(&self, path: &str) -> PendingRequest<'_> {
        PendingRequest::new(self, PodioRequest::new(self.client.url(path)))
    }

    fn pending_with(&self, path: &str, payload: RequestPayload) -> PendingRequest<'_> {
        PendingRequest::new(
            self,
            PodioRequest::with_payload(self.client.url(path), payload),
        )
    }
}

/// A built request bound to the client that will send it.
///
/// Consumed by one of the verb methods. Use [`into_request`] to keep the
/// descriptor and send it later through the client's executors.
///
/// [`into_request`]: PendingRequest::into_request
#[derive(Debug, Clone)]
#[must_use = "a pending request does nothing until a verb method is awaited"]
pub struct PendingRequest<'a> {
    client: &'a PodioRestClient,
    request: PodioRequest,
}

impl<'a> PendingRequest<'a> {
    pub(crate) fn new(client: &'a PodioRestClient, request: PodioRequest) -> Self {
        Self { client, request }
    }

    /// The descriptor that will be sent.
    pub fn request(&self) -> &PodioRequest {
        &self.request
    }

    /// Full target URL.
    pub fn endpoint(&self) -> &str {
        self.request.endpoint()
    }

    /// Detach the descriptor from the client.
    pub fn into_request(self) -> PodioRequest {
        self.request
    }

    /// Send as GET.
    pub async fn get(self) -> ApiResponse {
        self.client.get(&self.request).await
    }

    /// Send as POST.
    pub async fn post(self) -> ApiResponse {
        self.client.post(&self.request).await
    }

    /// Send as PUT.
    pub async fn put(self) -> ApiResponse {
        self.client.put(&self.request).await
    }

    /// Send as DELETE.
    pub async fn delete(self) -> ApiResponse {
        self.client.delete(&self.request).await
    }
}
