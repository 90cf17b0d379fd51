//! Security utilities for Podio API operations.
//!
//! ## URL Parameter Encoding
//!
//! User-provided values placed in URL paths MUST be encoded:
//!
//! ```rust
//! use podio_client::security::url;
//!
//! let encoded = url::encode_param("order/42 #1");
//! let path = format!("/item/app/1/external_id/{}", encoded);
//! assert_eq!(path, "/item/app/1/external_id/order%2F42%20%231");
//! ```

/// URL encoding utilities.
pub mod url {
    /// Percent-encode a value for use as a single URL path segment.
    ///
    /// Every byte outside the unreserved set (`A-Z a-z 0-9 - _ . ~`) is
    /// encoded, so `/`, `?` and `#` can't change the shape of the URL.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Returns true if the value is usable as a path segment at all.
    ///
    /// Empty values and the dot segments `.` / `..` are rejected since
    /// they would address a different resource once the URL is normalized.
    #[must_use]
    pub fn is_valid_segment(value: &str) -> bool {
        !value.is_empty() && value != "." && value != ".."
    }
}
