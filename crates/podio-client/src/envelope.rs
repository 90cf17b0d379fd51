//! The settled result returned by every Podio executor.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::response::RateLimit;

/// Outcome of one Podio API call.
///
/// Executors never return a bare `Err`: network failures, error statuses
/// and unparseable bodies all land in [`ApiResponse::error`]. Exactly one of
/// [`data`](ApiResponse::data) / [`error`](ApiResponse::error) is present.
///
/// # Example
///
/// ```rust,ignore
/// let response = client.get_json("/org/").await;
/// match response.error() {
///     Some(err) => eprintln!("failed: {err}"),
///     None => println!("{:?}", response.data()),
/// }
/// println!("calls left: {:?}", response.remaining_limit());
/// ```
#[derive(Debug)]
pub struct ApiResponse<T = serde_json::Value> {
    result: Result<T>,
    rate_limit: RateLimit,
}

impl<T> ApiResponse<T> {
    /// Build an envelope from a result and the response's rate-limit counters.
    pub fn new(result: Result<T>, rate_limit: RateLimit) -> Self {
        Self { result, rate_limit }
    }

    /// A failure that happened before any response was received.
    pub fn from_error(error: Error) -> Self {
        Self::new(Err(error), RateLimit::default())
    }

    /// The response data, if the call succeeded.
    pub fn data(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// The error, if the call failed.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }

    /// Returns true if the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Rate-limit counters reported with the response.
    pub fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    /// Value of `X-Rate-Limit-Remaining`, if sent and numeric.
    pub fn remaining_limit(&self) -> Option<u64> {
        self.rate_limit.remaining
    }

    /// Value of `X-Rate-Limit-Limit`, if sent and numeric.
    pub fn limit(&self) -> Option<u64> {
        self.rate_limit.limit
    }

    /// Borrow the outcome as a standard `Result`.
    pub fn as_result(&self) -> std::result::Result<&T, &Error> {
        self.result.as_ref()
    }

    /// Convert into a standard `Result`, dropping the rate-limit counters.
    pub fn into_result(self) -> Result<T> {
        self.result
    }

    /// Split into `(data, error)`; exactly one side is `Some`.
    pub fn into_parts(self) -> (Option<T>, Option<Error>) {
        match self.result {
            Ok(data) => (Some(data), None),
            Err(err) => (None, Some(err)),
        }
    }

    /// Map the success value, keeping errors and counters.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            result: self.result.map(f),
            rate_limit: self.rate_limit,
        }
    }
}

impl ApiResponse<serde_json::Value> {
    /// Deserialize the JSON data into a typed value.
    ///
    /// A deserialization failure becomes the envelope's error.
    pub fn typed<T: DeserializeOwned>(self) -> ApiResponse<T> {
        ApiResponse {
            result: self
                .result
                .and_then(|value| serde_json::from_value(value).map_err(Into::into)),
            rate_limit: self.rate_limit,
        }
    }
}

impl<T> From<ApiResponse<T>> for Result<T> {
    fn from(response: ApiResponse<T>) -> Self {
        response.result
    }
}
