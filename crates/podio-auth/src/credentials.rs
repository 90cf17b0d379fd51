//! Podio credentials loaded from the environment or a token response.
//!
//! Debug output redacts every token and the client secret.

use chrono::{DateTime, Utc};

use crate::error::{Error, ErrorKind, Result};

/// Access token plus whatever is needed to refresh it.
#[derive(Clone)]
pub struct PodioCredentials {
    access_token: String,
    refresh_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for PodioCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PodioCredentials")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl PodioCredentials {
    /// Create credentials holding only an access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            client_id: None,
            client_secret: None,
            expires_at: None,
        }
    }

    /// Attach a refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Attach the OAuth client the tokens were issued to.
    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Set the instant the access token stops being valid.
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `PODIO_OAUTH_TOKEN`
    ///
    /// Optional:
    /// - `PODIO_REFRESH_TOKEN`
    /// - `PODIO_CLIENT_ID` and `PODIO_CLIENT_SECRET` (only used as a pair)
    pub fn from_env() -> Result<Self> {
        let access_token = std::env::var("PODIO_OAUTH_TOKEN")
            .map_err(|_| Error::new(ErrorKind::EnvVar("PODIO_OAUTH_TOKEN".to_string())))?;

        if access_token.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "PODIO_OAUTH_TOKEN is empty".to_string(),
            )));
        }

        let mut creds = Self::new(access_token);

        if let Ok(rt) = std::env::var("PODIO_REFRESH_TOKEN") {
            creds = creds.with_refresh_token(rt);
        }

        if let (Ok(id), Ok(secret)) = (
            std::env::var("PODIO_CLIENT_ID"),
            std::env::var("PODIO_CLIENT_SECRET"),
        ) {
            creds = creds.with_client(id, secret);
        }

        Ok(creds)
    }

    /// The access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// The refresh token, if known.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The OAuth client id, if known.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub(crate) fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// When the access token expires, if known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns true once the expiry time has passed.
    ///
    /// Credentials without a known expiry are never reported as expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| at <= Utc::now())
    }

    /// Fail with [`ErrorKind::TokenExpired`] if the access token has expired.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.is_expired() {
            Err(Error::new(ErrorKind::TokenExpired))
        } else {
            Ok(())
        }
    }

    /// Replace the access token after a refresh.
    pub fn set_access_token(&mut self, token: impl Into<String>, expires_at: Option<DateTime<Utc>>) {
        self.access_token = token.into();
        self.expires_at = expires_at;
    }

    /// Replace the refresh token (Podio may rotate it on refresh).
    pub fn set_refresh_token(&mut self, token: impl Into<String>) {
        self.refresh_token = Some(token.into());
    }

    /// Build an [`OAuthConfig`](crate::OAuthConfig) from the stored client, if any.
    pub fn oauth_config(&self) -> Option<crate::OAuthConfig> {
        let id = self.client_id.as_ref()?;
        let mut config = crate::OAuthConfig::new(id);
        if let Some(secret) = self.client_secret() {
            config = config.with_secret(secret);
        }
        Some(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_credentials() {
        let creds = PodioCredentials::new("token123")
            .with_refresh_token("refresh456")
            .with_client("my-app", "s3cret");

        assert_eq!(creds.access_token(), "token123");
        assert_eq!(creds.refresh_token(), Some("refresh456"));
        assert_eq!(creds.client_id(), Some("my-app"));
        assert_eq!(creds.client_secret(), Some("s3cret"));
        assert!(creds.expires_at().is_none());
        assert!(!creds.is_expired());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = PodioCredentials::new("super_secret_access")
            .with_refresh_token("super_secret_refresh")
            .with_client("my-app", "super_secret_client");

        let debug_output = format!("{:?}", creds);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(debug_output.contains("my-app"));
        assert!(!debug_output.contains("super_secret_access"));
        assert!(!debug_output.contains("super_secret_refresh"));
        assert!(!debug_output.contains("super_secret_client"));
    }

    #[test]
    fn test_expiry() {
        let past = PodioCredentials::new("t").with_expires_at(Utc::now() - Duration::minutes(1));
        assert!(past.is_expired());
        assert!(matches!(
            past.ensure_valid().unwrap_err().kind,
            ErrorKind::TokenExpired
        ));

        let future = PodioCredentials::new("t").with_expires_at(Utc::now() + Duration::hours(8));
        assert!(!future.is_expired());
        assert!(future.ensure_valid().is_ok());
    }

    #[test]
    fn test_set_access_token() {
        let mut creds =
            PodioCredentials::new("old").with_expires_at(Utc::now() - Duration::minutes(1));
        assert!(creds.is_expired());

        creds.set_access_token("new", Some(Utc::now() + Duration::hours(1)));
        assert_eq!(creds.access_token(), "new");
        assert!(!creds.is_expired());
    }

    #[test]
    fn test_oauth_config_from_credentials() {
        assert!(PodioCredentials::new("t").oauth_config().is_none());

        let config = PodioCredentials::new("t")
            .with_client("my-app", "s3cret")
            .oauth_config()
            .unwrap();
        assert_eq!(config.client_id, "my-app");
        assert_eq!(config.client_secret(), Some("s3cret"));
    }
}
