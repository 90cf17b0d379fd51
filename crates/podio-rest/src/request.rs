//! Immutable request descriptors produced by the endpoint builders.

use serde::Serialize;

use crate::hook::{CreateHookPayload, ValidateHookPayload};
use crate::item::{FilterPayload, ItemPayload};

/// JSON body of a request, one variant per endpoint family.
///
/// Serialized untagged: the wire body is the inner struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    /// Item create / update: `{"fields": ..., "external_id"?: ...}`.
    Item(ItemPayload),
    /// Item filter: sort, filters and paging.
    Filter(FilterPayload),
    /// Hook creation: `{"url": ..., "type": ...}`.
    CreateHook(CreateHookPayload),
    /// Hook validation: `{"code": ...}`.
    ValidateHook(ValidateHookPayload),
}

impl RequestPayload {
    /// Serialize the payload to a JSON value.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// A fully resolved request: target URL plus optional JSON payload.
///
/// Every builder returns a fresh descriptor, so building a second request
/// never affects one built earlier.
#[derive(Debug, Clone, PartialEq)]
pub struct PodioRequest {
    endpoint: String,
    payload: Option<RequestPayload>,
}

impl PodioRequest {
    /// A request without a body.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: None,
        }
    }

    /// A request carrying `payload` (sent by POST / PUT only).
    pub fn with_payload(endpoint: impl Into<String>, payload: RequestPayload) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload: Some(payload),
        }
    }

    /// Full target URL, including any query string.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The payload, if any.
    pub fn payload(&self) -> Option<&RequestPayload> {
        self.payload.as_ref()
    }

    /// The payload as JSON, ready to send.
    pub(crate) fn body(&self) -> podio_client::Result<Option<serde_json::Value>> {
        self.payload
            .as_ref()
            .map(|payload| {
                payload.to_value().map_err(|e| {
                    podio_client::Error::with_source(
                        podio_client::ErrorKind::Serialization(e.to_string()),
                        e,
                    )
                })
            })
            .transpose()
    }
}
