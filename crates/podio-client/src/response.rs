//! HTTP response handling with Podio-specific extensions.

use std::sync::LazyLock;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};

/// Header carrying the number of calls left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-rate-limit-remaining";

/// Header carrying the ceiling of the current window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-rate-limit-limit";

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?;
        value.trim().parse::<u64>().ok().map(Duration::from_secs)
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Rate limit counters reported by Podio on this response.
    pub fn rate_limit(&self) -> RateLimit {
        RateLimit::from_headers(
            self.header(RATE_LIMIT_REMAINING_HEADER),
            self.header(RATE_LIMIT_LIMIT_HEADER),
        )
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// An empty body (e.g. `204 No Content` after a delete) deserializes
    /// from JSON `null`, so `serde_json::Value` and `Option<T>` targets
    /// accept it.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let status = self.status();
        let body = self.text().await?;
        parse_json_body(status, &body)
    }

    /// Get access to the inner reqwest::Response.
    pub fn into_inner(self) -> reqwest::Response {
        self.inner
    }
}

/// Rate limit counters from the `X-Rate-Limit-*` response headers.
///
/// Podio only sends these on some endpoints; absent or non-numeric
/// headers leave the corresponding field as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Calls remaining in the current window.
    pub remaining: Option<u64>,
    /// Total calls allowed in the current window.
    pub limit: Option<u64>,
}

impl RateLimit {
    /// Parse the raw header values.
    pub fn from_headers(remaining: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |v: Option<&str>| v.and_then(|s| s.trim().parse::<u64>().ok());
        Self {
            remaining: parse(remaining),
            limit: parse(limit),
        }
    }

    /// Calls used in the current window, when both counters are known.
    pub fn used(&self) -> Option<u64> {
        Some(self.limit?.saturating_sub(self.remaining?))
    }

    /// Usage percentage, when both counters are known.
    pub fn percentage(&self) -> Option<f64> {
        let limit = self.limit?;
        let used = self.used()?;
        if limit == 0 {
            Some(100.0)
        } else {
            Some((used as f64 / limit as f64) * 100.0)
        }
    }

    /// Returns true if the server reported zero remaining calls.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

/// Extension trait for processing Podio API responses.
pub trait ResponseExt {
    /// Check for Podio API errors and convert to appropriate error type.
    fn check_podio_error(self) -> impl std::future::Future<Output = Result<Response>> + Send;
}

impl ResponseExt for Response {
    async fn check_podio_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let retry_after = self.retry_after();
        let body = self.text().await.unwrap_or_default();
        Err(parse_error_response(status, &body, retry_after))
    }
}

/// Parse a success body as JSON, treating an empty body as `null`.
///
/// A body that is not valid JSON is an error regardless of the declared
/// content type; the message carries the status and a sanitized preview.
pub(crate) fn parse_json_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    let source = if body.trim().is_empty() { "null" } else { body };

    serde_json::from_str(source).map_err(|e| {
        Error::with_source(
            ErrorKind::Json(format!(
                "invalid JSON in {status} response: {e}; body: {}",
                sanitize_error_message(body)
            )),
            e,
        )
    })
}

/// Parse error response body and convert to appropriate error kind.
///
/// The body's details survive in every kind: a Podio JSON error keeps
/// `error` / `error_description`, any other body is kept as sanitized text.
pub(crate) fn parse_error_response(status: u16, body: &str, retry_after: Option<Duration>) -> Error {
    let podio_error = serde_json::from_str::<PodioErrorResponse>(body).ok();

    // Podio signals rate limiting with 420, proxies in front of it with 429
    if status == 420 || status == 429 {
        let message = match podio_error {
            Some(err) => {
                let description = sanitize_error_message(&err.description());
                if description.is_empty() {
                    err.error
                } else {
                    format!("{} - {description}", err.error)
                }
            }
            None => body_or_reason(status, body),
        };
        return Error::new(ErrorKind::RateLimited {
            status,
            message,
            retry_after,
        });
    }

    if let Some(err) = podio_error {
        let description = sanitize_error_message(&err.description());
        return Error::new(ErrorKind::PodioApi {
            status,
            error: err.error,
            description,
        });
    }

    let sanitized = body_or_reason(status, body);
    let kind = match status {
        401 => ErrorKind::Authentication(sanitized),
        403 => ErrorKind::Authorization(sanitized),
        404 => ErrorKind::NotFound(sanitized),
        _ => ErrorKind::Http {
            status,
            message: sanitized,
        },
    };

    Error::new(kind)
}

/// Sanitized body text, or the status reason phrase when the body is empty.
fn body_or_reason(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("no response body")
            .to_string()
    } else {
        sanitize_error_message(body)
    }
}

static OAUTH_HEADER_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(r"(?i)(OAuth2|Bearer)\s+[A-Za-z0-9._~+/=-]+").expect("static regex")
});

static SECRET_FIELD_PATTERN: LazyLock<regex_lite::Regex> = LazyLock::new(|| {
    regex_lite::Regex::new(
        r#"("?(?:access_token|refresh_token|client_secret)"?\s*[:=]\s*"?)[A-Za-z0-9._~+/=-]+"#,
    )
    .expect("static regex")
});

/// Sanitize an error message to prevent exposing sensitive data.
///
/// This function:
/// - Removes `OAuth2 <token>` / `Bearer <token>` credentials
/// - Removes values of `access_token`, `refresh_token` and `client_secret`
/// - Truncates messages longer than 500 characters
pub fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let sanitized = OAUTH_HEADER_PATTERN.replace_all(message, "$1 [REDACTED]");
    let mut sanitized = SECRET_FIELD_PATTERN
        .replace_all(&sanitized, "${1}[REDACTED]")
        .to_string();

    if let Some((idx, _)) = sanitized.char_indices().nth(MAX_LENGTH) {
        sanitized.truncate(idx);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Podio API error response format.
#[derive(Debug, serde::Deserialize)]
struct PodioErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error_detail: Option<serde_json::Value>,
}

impl PodioErrorResponse {
    fn description(&self) -> String {
        match (&self.error_description, &self.error_detail) {
            (Some(desc), _) if !desc.is_empty() => desc.clone(),
            (_, Some(serde_json::Value::String(detail))) => detail.clone(),
            (_, Some(detail)) if !detail.is_null() => detail.to_string(),
            _ => String::new(),
        }
    }
}
