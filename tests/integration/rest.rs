//! REST API integration tests using PODIO_OAUTH_TOKEN.

use super::common::{rest_client, test_app_id};
use podio_api::{FilterOptions, SearchOptions};

// ============================================================================
// Organizations, spaces and apps
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_rest_organizations_and_spaces() {
    let client = rest_client();

    let orgs = client.get_organizations().get().await;
    let orgs = orgs.into_result().expect("Listing organizations should succeed");
    let orgs = orgs.as_array().expect("Organizations should be an array");

    if let Some(org_id) = orgs.first().and_then(|o| o["org_id"].as_u64()) {
        let spaces = client.get_spaces_by_org_id(org_id).get().await;
        assert!(spaces.is_ok(), "Listing spaces failed: {:?}", spaces.error());
    }
}

#[tokio::test]
#[ignore]
async fn test_rest_apps_report_rate_limit() {
    let client = rest_client();

    let apps = client.get_apps().get().await;
    assert!(apps.is_ok(), "Listing apps failed: {:?}", apps.error());
    println!(
        "rate limit: {:?} of {:?} remaining",
        apps.remaining_limit(),
        apps.limit()
    );
}

#[tokio::test]
#[ignore]
async fn test_rest_concurrent_reads() {
    let client = rest_client();

    let (orgs, apps) = futures::join!(client.get_organizations().get(), client.get_apps().get());

    assert!(orgs.is_ok(), "{:?}", orgs.error());
    assert!(apps.is_ok(), "{:?}", apps.error());
}

#[tokio::test]
#[ignore]
async fn test_rest_missing_item_is_error() {
    let client = rest_client();

    let response = client.get_item(1).get().await;
    assert!(response.data().is_none());
    let status = response.error().and_then(|e| e.status());
    assert!(
        matches!(status, Some(403) | Some(404)),
        "expected 403/404, got {:?}",
        response.error()
    );
}

// ============================================================================
// Items (need PODIO_TEST_APP_ID)
// ============================================================================

#[tokio::test]
#[ignore]
async fn test_rest_item_lifecycle() {
    let Some(app_id) = test_app_id() else {
        println!("PODIO_TEST_APP_ID not set, skipping");
        return;
    };
    let client = rest_client();

    let app = client.get_app_by_id(app_id).get().await;
    let app = app.into_result().expect("Fetching the test app should succeed");
    let title_field = app["fields"]
        .as_array()
        .and_then(|fields| fields.iter().find(|f| f["type"] == "text"))
        .and_then(|f| f["external_id"].as_str())
        .expect("Test app needs a text field")
        .to_string();

    let external_id = format!("podio-api-it-{}", std::process::id());
    let created = client
        .add_item(
            app_id,
            serde_json::json!({ title_field.clone(): "Integration test item" }),
            Some(&external_id),
        )
        .post()
        .await
        .into_result()
        .expect("Creating an item should succeed");
    let item_id = created["item_id"].as_u64().expect("item_id in response");

    let by_external = client
        .get_item_by_external_id(app_id, &external_id)
        .expect("valid external id")
        .get()
        .await;
    assert_eq!(
        by_external.data().and_then(|i| i["item_id"].as_u64()),
        Some(item_id)
    );

    let updated = client
        .update_item(item_id, serde_json::json!({ title_field: "Updated" }))
        .put()
        .await;
    assert!(updated.is_ok(), "{:?}", updated.error());

    let values = client.get_item_values_v2(item_id).get().await;
    assert!(values.is_ok(), "{:?}", values.error());

    let filtered = client
        .filter_items(app_id, &FilterOptions::new().sort_by("created_on").sort_desc(true).limit(5))
        .post()
        .await;
    assert!(filtered.is_ok(), "{:?}", filtered.error());

    let search = client
        .search_in_app(app_id, &SearchOptions::new("Updated").ref_type("item").limit(5))
        .expect("valid search options")
        .get()
        .await;
    assert!(search.is_ok(), "{:?}", search.error());

    let deleted = client.delete_item(item_id).delete().await;
    assert!(deleted.is_ok(), "{:?}", deleted.error());
}
