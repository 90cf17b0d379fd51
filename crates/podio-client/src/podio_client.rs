//! High-level Podio client with the four verb executors.
//!
//! This module provides `PodioClient`, which combines the OAuth2 access
//! token with an HTTP client and settles every call into an
//! [`ApiResponse`].
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::PodioHttpClient;
use crate::config::ClientConfig;
use crate::envelope::ApiResponse;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::ResponseExt;
use crate::DEFAULT_BASE_URL;

/// Authenticated Podio API client.
///
/// Holds the base URL, the OAuth2 access token and the HTTP transport.
/// It keeps no per-request state, so one instance can serve concurrent
/// calls; clone it freely.
///
/// # Example
///
/// ```rust,ignore
/// use podio_client::PodioClient;
///
/// let client = PodioClient::new("access-token")?;
///
/// let orgs = client.get_json("/org/").await;
/// if let Some(err) = orgs.error() {
///     eprintln!("{err}");
/// }
/// ```
#[derive(Clone)]
pub struct PodioClient {
    http: PodioHttpClient,
    base_url: String,
    access_token: String,
}

impl std::fmt::Debug for PodioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodioClient")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl PodioClient {
    /// Create a new client against the public Podio API.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(access_token, ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    pub fn with_config(access_token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = PodioHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
        })
    }

    /// Point the client at a different API root (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Replace the access token, returning the updated client.
    pub fn with_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Replace the access token in place (e.g. after a refresh).
    pub fn set_token(&mut self, access_token: impl Into<String>) {
        self.access_token = access_token.into();
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &PodioHttpClient {
        &self.http
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the base URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    // =========================================================================
    // Authenticated request builders
    // =========================================================================

    /// Create an authenticated request builder for `method`.
    ///
    /// Every verb carries `Authorization: OAuth2 <token>` and
    /// `Content-Type: application/json`.
    pub fn request(&self, method: RequestMethod, url: &str) -> RequestBuilder {
        RequestBuilder::new(method, url)
            .oauth_auth(&self.access_token)
            .json_content_type()
    }

    // =========================================================================
    // Executors
    // =========================================================================

    /// Perform one request and settle it into an [`ApiResponse`].
    ///
    /// `body` is only sent for POST and PUT. An empty endpoint fails with
    /// [`ErrorKind::InvalidUrl`] without touching the network.
    #[instrument(skip(self, body), fields(method = %method, endpoint = %endpoint))]
    pub async fn send(
        &self,
        method: RequestMethod,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResponse {
        if endpoint.trim().is_empty() {
            return ApiResponse::from_error(Error::new(ErrorKind::InvalidUrl(
                "no endpoint was set for this request".to_string(),
            )));
        }

        let mut request = self.request(method, &self.url(endpoint));
        if method.has_body() {
            if let Some(body) = body {
                request = request.json_value(body);
            }
        }

        self.dispatch(request).await
    }

    /// Execute a prepared request and settle it into an [`ApiResponse`].
    pub async fn dispatch(&self, request: RequestBuilder) -> ApiResponse {
        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "Request failed before a response was received");
                return ApiResponse::from_error(err);
            }
        };

        let rate_limit = response.rate_limit();
        let result = match response.check_podio_error().await {
            Ok(response) => response.json().await,
            Err(err) => Err(err),
        };

        if let Err(ref err) = result {
            debug!(error = %err, status = ?err.status(), "Podio request failed");
        }

        ApiResponse::new(result, rate_limit)
    }

    /// GET request with JSON response.
    pub async fn get_json(&self, endpoint: &str) -> ApiResponse {
        self.send(RequestMethod::Get, endpoint, None).await
    }

    /// POST request with JSON body and response.
    pub async fn post_json<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResponse {
        match serde_json::to_value(body) {
            Ok(body) => self.send(RequestMethod::Post, endpoint, Some(body)).await,
            Err(err) => ApiResponse::from_error(serialization_error(err)),
        }
    }

    /// PUT request with JSON body and response.
    pub async fn put_json<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> ApiResponse {
        match serde_json::to_value(body) {
            Ok(body) => self.send(RequestMethod::Put, endpoint, Some(body)).await,
            Err(err) => ApiResponse::from_error(serialization_error(err)),
        }
    }

    /// DELETE request. A `204 No Content` answer yields `null` data.
    pub async fn delete_json(&self, endpoint: &str) -> ApiResponse {
        self.send(RequestMethod::Delete, endpoint, None).await
    }
}

fn serialization_error(err: serde_json::Error) -> Error {
    Error::with_source(ErrorKind::Serialization(err.to_string()), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn mock_client(server: &MockServer) -> PodioClient {
        PodioClient::with_config("token123", ClientConfig::builder().with_tracing(false).build())
            .unwrap()
            .with_base_url(server.uri())
            .unwrap()
    }

    #[test]
    fn test_request_carries_token_and_json_content_type() {
        let client = PodioClient::new("token123").unwrap();
        let req = client.request(RequestMethod::Delete, "https://api.podio.com/item/1");

        assert_eq!(req.method, RequestMethod::Delete);
        assert_eq!(req.oauth_token.as_deref(), Some("token123"));
        assert_eq!(
            req.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_url_building() {
        let client = PodioClient::new("token123").unwrap();

        assert_eq!(client.base_url(), "https://api.podio.com");
        assert_eq!(client.url("/org/"), "https://api.podio.com/org/");
        assert_eq!(client.url("org/"), "https://api.podio.com/org/");
        assert_eq!(client.url("https://other.com/path"), "https://other.com/path");
    }

    #[test]
    fn test_trailing_slash_handling() {
        let client = PodioClient::new("token")
            .unwrap()
            .with_base_url("http://localhost:8080/")
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/app/1"), "http://localhost:8080/app/1");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = PodioClient::new("token")
            .unwrap()
            .with_base_url("not a url")
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidUrl(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PodioClient::new("super_secret_token").unwrap();
        let debug_output = format!("{:?}", client);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_token"));
    }

    #[test]
    fn test_set_token() {
        let mut client = PodioClient::new("old").unwrap();
        client.set_token("new");
        assert_eq!(client.access_token(), "new");
        assert_eq!(client.with_token("newer").access_token(), "newer");
    }

    #[tokio::test]
    async fn test_get_success_with_rate_limit_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/"))
            .and(header("Authorization", "OAuth2 token123"))
            .and(header("Content-Type", "application/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"org_id": 1}]))
                    .insert_header("X-Rate-Limit-Remaining", "4999")
                    .insert_header("X-Rate-Limit-Limit", "5000"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.get_json("/org/").await;

        assert!(response.error().is_none());
        assert_eq!(response.data().unwrap()[0]["org_id"], 1);
        assert_eq!(response.remaining_limit(), Some(4999));
        assert_eq!(response.limit(), Some(5000));
    }

    #[tokio::test]
    async fn test_missing_rate_limit_headers_are_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"app_id": 1})))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.get_json("/app/1").await;

        assert!(response.is_ok());
        assert_eq!(response.remaining_limit(), None);
        assert_eq!(response.limit(), None);
    }

    #[tokio::test]
    async fn test_error_status_settles_into_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/item/9"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({
                        "error": "invalid_value",
                        "error_description": "Invalid value for field title"
                    }))
                    .insert_header("X-Rate-Limit-Remaining", "12"),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .put_json("/item/9", &serde_json::json!({"fields": {}}))
            .await;

        assert!(response.data().is_none());
        let err = response.error().unwrap();
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("invalid_value"));
        assert_eq!(response.remaining_limit(), Some(12));
    }

    #[tokio::test]
    async fn test_non_json_error_body_keeps_details() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/item/app/1/"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance window"))
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .post_json("/item/app/1/", &serde_json::json!({"fields": {}}))
            .await;

        let msg = response.error().unwrap().to_string();
        assert!(msg.contains("503"), "{msg}");
        assert!(msg.contains("maintenance window"), "{msg}");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/item/app/1/filter/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html>proxy login</html>", "text/html"),
            )
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .post_json("/item/app/1/filter/", &serde_json::json!({"limit": 30}))
            .await;

        let err = response.error().unwrap();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
        assert!(err.to_string().contains("200"));
    }

    #[tokio::test]
    async fn test_post_sends_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/item/app/5/"))
            .and(body_json(serde_json::json!({"fields": {"title": "X"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"item_id": 77})))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .post_json("/item/app/5/", &serde_json::json!({"fields": {"title": "X"}}))
            .await;

        assert_eq!(response.data().unwrap()["item_id"], 77);
    }

    #[tokio::test]
    async fn test_delete_no_content_is_null_data() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/item/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.delete_json("/item/3").await;

        assert!(response.error().is_none());
        assert_eq!(response.data(), Some(&serde_json::Value::Null));
    }

    #[tokio::test]
    async fn test_get_never_sends_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/item/3"))
            .respond_with(|req: &wiremock::Request| {
                if req.body.is_empty() {
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true}))
                } else {
                    ResponseTemplate::new(400)
                }
            })
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .send(
                RequestMethod::Get,
                "/item/3",
                Some(serde_json::json!({"ignored": true})),
            )
            .await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_empty_endpoint_is_invalid() {
        let client = PodioClient::new("token").unwrap();
        let response = client.get_json("").await;

        assert!(response.data().is_none());
        assert!(matches!(
            response.error().map(|e| &e.kind),
            Some(ErrorKind::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_network_failure_settles_into_envelope() {
        let client = PodioClient::new("token")
            .unwrap()
            .with_base_url("http://127.0.0.1:1")
            .unwrap();
        let response = client.get_json("/org/").await;

        assert!(response.data().is_none());
        assert!(response.error().is_some());
        assert_eq!(response.remaining_limit(), None);
    }
}
