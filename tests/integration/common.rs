use podio_api::{PodioCredentials, PodioRestClient};

/// Credentials for live tests.
///
/// Panics with a setup hint when `PODIO_OAUTH_TOKEN` is missing; the tests
/// calling this are `#[ignore]`d so a plain `cargo test` never gets here.
pub fn get_credentials() -> PodioCredentials {
    PodioCredentials::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\n\
            Integration tests need a Podio access token ({e}).\n\
            \n\
            To fix:\n\
              1. Create an API key at https://podio.com/settings/api\n\
              2. Obtain a token, e.g. with cargo run --bin podio-refresh-token\n\
              3. Export: export PODIO_OAUTH_TOKEN='...'\n\n"
        )
    })
}

pub fn rest_client() -> PodioRestClient {
    let creds = get_credentials();
    PodioRestClient::new(creds.access_token()).expect("Failed to create REST client")
}

/// App used by the item tests, from `PODIO_TEST_APP_ID`.
pub fn test_app_id() -> Option<u64> {
    std::env::var("PODIO_TEST_APP_ID").ok()?.parse().ok()
}
