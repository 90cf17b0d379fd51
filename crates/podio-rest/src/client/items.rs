//! Item endpoints.

use podio_client::security::url as url_security;

use super::{PendingRequest, PodioRestClient};
use crate::error::{Error, Result};
use crate::item::{CountOptions, FilterOptions, FilterPayload, ItemPayload, SearchOptions};
use crate::request::RequestPayload;

impl PodioRestClient {
    /// Create an item in an app. Send with POST.
    ///
    /// `external_id` is only included when present and non-empty.
    pub fn add_item(
        &self,
        app_id: u64,
        fields: serde_json::Value,
        external_id: Option<&str>,
    ) -> PendingRequest<'_> {
        self.pending_with(
            &format!("/item/app/{app_id}/"),
            RequestPayload::Item(ItemPayload::new(fields, external_id)),
        )
    }

    /// Update an item's field values. Send with PUT.
    pub fn update_item(&self, item_id: u64, fields: serde_json::Value) -> PendingRequest<'_> {
        self.pending_with(
            &format!("/item/{item_id}"),
            RequestPayload::Item(ItemPayload::new(fields, None)),
        )
    }

    /// Delete an item. Send with DELETE.
    pub fn delete_item(&self, item_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/item/{item_id}"))
    }

    /// Fetch an item. Send with GET.
    pub fn get_item(&self, item_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/item/{item_id}"))
    }

    /// Fetch an item by its external id. Send with GET.
    ///
    /// The external id is percent-encoded as a single path segment.
    pub fn get_item_by_external_id(
        &self,
        app_id: u64,
        external_id: &str,
    ) -> Result<PendingRequest<'_>> {
        if !url_security::is_valid_segment(external_id) {
            return Err(Error::invalid_input(format!(
                "invalid external id: {external_id:?}"
            )));
        }

        Ok(self.pending(&format!(
            "/item/app/{app_id}/external_id/{}",
            url_security::encode_param(external_id)
        )))
    }

    /// Fetch an item's field values (v2 format). Send with GET.
    pub fn get_item_values_v2(&self, item_id: u64) -> PendingRequest<'_> {
        self.pending(&format!("/item/{item_id}/value/v2"))
    }

    /// Filter the items of an app. Send with POST.
    pub fn filter_items(&self, app_id: u64, options: &FilterOptions) -> PendingRequest<'_> {
        self.pending_with(
            &format!("/item/app/{app_id}/filter/"),
            RequestPayload::Filter(FilterPayload::from(options)),
        )
    }

    /// Full-text search within an app. Send with GET.
    pub fn search_in_app(
        &self,
        app_id: u64,
        options: &SearchOptions,
    ) -> Result<PendingRequest<'_>> {
        let query = options.to_query_string()?;
        Ok(self.pending(&format!("/search/app/{app_id}/v2?{query}")))
    }

    /// Count the items of an app, optionally narrowed to a view or filter. Send with GET.
    pub fn get_item_count(
        &self,
        app_id: u64,
        options: &CountOptions,
    ) -> Result<PendingRequest<'_>> {
        let query = options.to_query_string()?;
        let path = if query.is_empty() {
            format!("/item/app/{app_id}/count")
        } else {
            format!("/item/app/{app_id}/count?{query}")
        };
        Ok(self.pending(&path))
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::mock_client;
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> PodioRestClient {
        PodioRestClient::new("token").unwrap()
    }

    #[test]
    fn test_item_endpoints() {
        let client = client();

        assert_eq!(client.get_item(5).endpoint(), "https://api.podio.com/item/5");
        assert_eq!(client.delete_item(5).endpoint(), "https://api.podio.com/item/5");
        assert_eq!(
            client.get_item_values_v2(5).endpoint(),
            "https://api.podio.com/item/5/value/v2"
        );
        assert!(client.get_item(5).request().payload().is_none());
    }

    #[test]
    fn test_add_item_payload() {
        let client = client();

        let request = client.add_item(28578294, json!({"title": "X"}), None).into_request();
        assert_eq!(request.endpoint(), "https://api.podio.com/item/app/28578294/");
        assert_eq!(
            request.payload(),
            Some(&RequestPayload::Item(ItemPayload {
                fields: json!({"title": "X"}),
                external_id: None,
            }))
        );

        let request = client
            .add_item(28578294, json!({"title": "X"}), Some("ext-1"))
            .into_request();
        assert_eq!(
            request.payload().unwrap().to_value().unwrap(),
            json!({"fields": {"title": "X"}, "external_id": "ext-1"})
        );
    }

    #[test]
    fn test_external_id_is_encoded() {
        let client = client();

        let pending = client.get_item_by_external_id(3, "order/42 #1").unwrap();
        assert_eq!(
            pending.endpoint(),
            "https://api.podio.com/item/app/3/external_id/order%2F42%20%231"
        );

        let err = client.get_item_by_external_id(3, "").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
    }

    #[test]
    fn test_search_in_app_endpoint() {
        let client = client();
        let options = SearchOptions::new("Alamo").ref_type("item").limit(50);

        assert_eq!(
            client.search_in_app(1, &options).unwrap().endpoint(),
            "https://api.podio.com/search/app/1/v2?query=Alamo&ref_type=item&limit=50"
        );
    }

    #[test]
    fn test_item_count_endpoint() {
        let client = client();

        assert_eq!(
            client.get_item_count(1, &CountOptions::new()).unwrap().endpoint(),
            "https://api.podio.com/item/app/1/count"
        );
        assert_eq!(
            client
                .get_item_count(1, &CountOptions::new().view_id(3))
                .unwrap()
                .endpoint(),
            "https://api.podio.com/item/app/1/count?view_id=3"
        );
    }

    #[tokio::test]
    async fn test_filter_items_posts_defaults() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/item/app/7/filter/"))
            .and(body_json(json!({"limit": 30, "offset": 0})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"total": 0, "filtered": 0, "items": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.filter_items(7, &FilterOptions::new()).post().await;

        assert_eq!(response.data().unwrap()["total"], 0);
    }

    #[tokio::test]
    async fn test_update_item_puts_fields() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/item/11"))
            .and(body_json(json!({"fields": {"status": "done"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"revision": 3})))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.update_item(11, json!({"status": "done"})).put().await;

        assert_eq!(response.data().unwrap()["revision"], 3);
    }

    #[tokio::test]
    async fn test_search_sends_query() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/app/1/v2"))
            .and(query_param("query", "Alamo"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client
            .search_in_app(1, &SearchOptions::new("Alamo").limit(50))
            .unwrap()
            .get()
            .await;

        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn test_delete_item_no_content() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/item/12"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = mock_client(&server);
        let response = client.delete_item(12).delete().await;

        assert!(response.error().is_none());
        assert_eq!(response.data(), Some(&serde_json::Value::Null));
    }
}
