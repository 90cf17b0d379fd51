//! OAuth integration tests.

use super::common::get_credentials;
use podio_api::OAuthClient;

#[tokio::test]
#[ignore]
async fn test_auth_credentials_from_env() {
    let creds = get_credentials();
    assert!(!creds.access_token().is_empty());
    assert!(!format!("{creds:?}").contains(creds.access_token()));
}

#[tokio::test]
#[ignore]
async fn test_auth_refresh_token() {
    let mut creds = get_credentials();
    let Some(config) = creds.oauth_config() else {
        println!("PODIO_CLIENT_ID / PODIO_CLIENT_SECRET not set, skipping");
        return;
    };
    if creds.refresh_token().is_none() {
        println!("PODIO_REFRESH_TOKEN not set, skipping");
        return;
    }

    let client = OAuthClient::new(config).expect("Failed to create OAuth client");
    client
        .refresh_credentials(&mut creds, podio_api::client::DEFAULT_BASE_URL)
        .await
        .expect("Refreshing should succeed");

    assert!(!creds.is_expired());
    assert!(creds.expires_at().is_some());
}
