//! Item payloads and the option sets for filter, search and count.

use serde::Serialize;

use crate::error::Result;

/// Body of item create / update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    /// Field values keyed by external id or field id (opaque to this crate).
    pub fields: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

impl ItemPayload {
    /// Build a payload; an empty external id is dropped.
    pub fn new(fields: serde_json::Value, external_id: Option<&str>) -> Self {
        Self {
            fields,
            external_id: external_id.filter(|id| !id.is_empty()).map(str::to_string),
        }
    }
}

/// Default page size for item filtering.
pub const DEFAULT_FILTER_LIMIT: u32 = 30;

/// Options for [`filter_items`](crate::PodioRestClient::filter_items).
///
/// # Example
///
/// ```rust
/// use podio_rest::FilterOptions;
///
/// let options = FilterOptions::new()
///     .sort_by("created_on")
///     .sort_desc(true)
///     .filters(serde_json::json!({"status": [1]}))
///     .limit(100);
/// assert_eq!(options.limit, Some(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub sort_by: Option<String>,
    pub sort_desc: Option<bool>,
    pub filters: Option<serde_json::Value>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub remember: Option<bool>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_desc(mut self, desc: bool) -> Self {
        self.sort_desc = Some(desc);
        self
    }

    pub fn filters(mut self, filters: serde_json::Value) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn remember(mut self, remember: bool) -> Self {
        self.remember = Some(remember);
        self
    }
}

/// Wire body of an item filter call.
///
/// `limit` and `offset` are always sent; a missing or zero limit becomes
/// [`DEFAULT_FILTER_LIMIT`], a missing offset becomes 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remember: Option<bool>,
}

impl From<&FilterOptions> for FilterPayload {
    fn from(options: &FilterOptions) -> Self {
        Self {
            sort_by: options.sort_by.clone(),
            sort_desc: options.sort_desc,
            filters: options.filters.clone(),
            limit: options
                .limit
                .filter(|&limit| limit > 0)
                .unwrap_or(DEFAULT_FILTER_LIMIT),
            offset: options.offset.unwrap_or(0),
            remember: options.remember,
        }
    }
}

/// Options for [`search_in_app`](crate::PodioRestClient::search_in_app).
///
/// Only `query` is required. Empty strings and lists, zero numbers and
/// `false` flags are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub query: String,
    pub ref_type: Option<String>,
    pub search_fields: Vec<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub counts: bool,
    pub highlights: bool,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn ref_type(mut self, ref_type: impl Into<String>) -> Self {
        self.ref_type = Some(ref_type.into());
        self
    }

    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn counts(mut self, counts: bool) -> Self {
        self.counts = counts;
        self
    }

    pub fn highlights(mut self, highlights: bool) -> Self {
        self.highlights = highlights;
        self
    }

    /// Render the form-encoded query string (without the leading `?`).
    pub fn to_query_string(&self) -> Result<String> {
        let search_fields = self.search_fields.join(",");

        let query = SearchQuery {
            query: &self.query,
            ref_type: self.ref_type.as_deref().filter(|s| !s.is_empty()),
            search_fields: Some(search_fields.as_str()).filter(|s| !s.is_empty()),
            limit: self.limit.filter(|&n| n > 0),
            offset: self.offset.filter(|&n| n > 0),
            counts: self.counts.then_some(true),
            highlights: self.highlights.then_some(true),
        };

        Ok(serde_urlencoded::to_string(&query)?)
    }
}

// Field order is the query-string order.
#[derive(Serialize)]
struct SearchQuery<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_fields: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    counts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    highlights: Option<bool>,
}

/// Options for [`get_item_count`](crate::PodioRestClient::get_item_count).
///
/// `view_id` counts the items of a saved view; each filter pair is sent as
/// `key=value` in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountOptions {
    pub view_id: Option<u64>,
    pub filters: Vec<(String, String)>,
}

impl CountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_id(mut self, view_id: u64) -> Self {
        self.view_id = Some(view_id);
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    /// Render the form-encoded query string; empty when no option is set.
    pub fn to_query_string(&self) -> Result<String> {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(view_id) = self.view_id.filter(|&id| id > 0) {
            pairs.push(("view_id", view_id.to_string()));
        }
        for (key, value) in &self.filters {
            if !key.is_empty() && !value.is_empty() {
                pairs.push((key.as_str(), value.clone()));
            }
        }

        Ok(serde_urlencoded::to_string(&pairs)?)
    }
}
