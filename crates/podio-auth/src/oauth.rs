//! OAuth 2.0 refresh-token flow against Podio's `/oauth/token/v2`.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use podio_client::{ClientConfig, PodioHttpClient};

use crate::credentials::PodioCredentials;
use crate::error::{Error, ErrorKind, Result};
use crate::TOKEN_PATH;

/// OAuth 2.0 configuration for a Podio API client.
///
/// The client secret is redacted in Debug output.
#[derive(Clone)]
pub struct OAuthConfig {
    /// Client id issued by Podio.
    pub client_id: String,
    client_secret: Option<String>,
}

impl std::fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl OAuthConfig {
    /// Create a new OAuth config.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
        }
    }

    /// Set the client secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(secret.into());
        self
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Load the client id and secret from `PODIO_CLIENT_ID` / `PODIO_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var("PODIO_CLIENT_ID")
            .map_err(|_| Error::new(ErrorKind::EnvVar("PODIO_CLIENT_ID".to_string())))?;
        let client_secret = std::env::var("PODIO_CLIENT_SECRET")
            .map_err(|_| Error::new(ErrorKind::EnvVar("PODIO_CLIENT_SECRET".to_string())))?;

        Ok(Self::new(client_id).with_secret(client_secret))
    }
}

/// OAuth client for exchanging refresh tokens.
#[derive(Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    http: PodioHttpClient,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Create a new OAuth client.
    pub fn new(config: OAuthConfig) -> Result<Self> {
        Self::with_http_config(config, ClientConfig::default())
    }

    /// Create a new OAuth client with custom HTTP configuration.
    pub fn with_http_config(config: OAuthConfig, http_config: ClientConfig) -> Result<Self> {
        let http = PodioHttpClient::new(http_config)?;
        Ok(Self { config, http })
    }

    /// Get the OAuth config.
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// Posts a JSON body to `{api_url}/oauth/token/v2` without an
    /// `Authorization` header. The refresh token is not logged.
    #[instrument(skip(self, refresh_token), fields(client_id = %self.config.client_id))]
    pub async fn refresh_token(&self, refresh_token: &str, api_url: &str) -> Result<TokenResponse> {
        let client_secret = self.config.client_secret().ok_or_else(|| {
            Error::new(ErrorKind::InvalidCredentials(
                "client secret is required for the refresh-token grant".to_string(),
            ))
        })?;

        if refresh_token.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "refresh token is empty".to_string(),
            )));
        }

        let url = url::Url::parse(api_url)?;
        let endpoint = format!("{}{}", url.as_str().trim_end_matches('/'), TOKEN_PATH);

        let body = RefreshRequest {
            grant_type: "refresh_token",
            client_id: &self.config.client_id,
            client_secret,
            refresh_token,
        };

        let request = self.http.post(endpoint).json(&body)?.no_store();
        let token: TokenResponse = self.http.send_json(request).await?;

        debug!(expires_in = ?token.expires_in, "Access token refreshed");
        Ok(token)
    }

    /// Refresh using the refresh token stored in `credentials`.
    ///
    /// On success the credentials carry the new access token and expiry;
    /// a rotated refresh token replaces the old one.
    pub async fn refresh_credentials(
        &self,
        credentials: &mut PodioCredentials,
        api_url: &str,
    ) -> Result<()> {
        let refresh_token = credentials.refresh_token().ok_or_else(|| {
            Error::new(ErrorKind::InvalidCredentials(
                "no refresh token available".to_string(),
            ))
        })?;

        let token = self.refresh_token(refresh_token, api_url).await?;
        credentials.set_access_token(&token.access_token, token.expires_at());
        if let Some(rt) = token.refresh_token {
            credentials.set_refresh_token(rt);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

/// Token response from the refresh-token grant.
///
/// `access_token` and `refresh_token` are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// New access token.
    pub access_token: String,
    /// Token type (usually "bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Refresh token to use next time.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Scopes granted.
    #[serde(default)]
    pub scope: Option<String>,
    /// The entity the token was issued for (e.g. `{"type": "user", "id": 1}`).
    #[serde(default, rename = "ref")]
    pub reference: Option<serde_json::Value>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("scope", &self.scope)
            .field("ref", &self.reference)
            .finish()
    }
}

impl TokenResponse {
    /// Expiry instant computed from `expires_in`, relative to now.
    ///
    /// `None` when the server sent no lifetime or one that does not fit
    /// in a timestamp.
    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let lifetime = chrono::TimeDelta::try_seconds(self.expires_in?)?;
        chrono::Utc::now().checked_add_signed(lifetime)
    }

    /// Convert to [`PodioCredentials`].
    pub fn to_credentials(&self) -> PodioCredentials {
        let mut creds = PodioCredentials::new(&self.access_token);

        if let Some(ref rt) = self.refresh_token {
            creds = creds.with_refresh_token(rt);
        }
        if let Some(at) = self.expires_at() {
            creds = creds.with_expires_at(at);
        }

        creds
    }
}
