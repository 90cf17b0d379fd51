//! Transport settings for talking to Podio.

use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Transport settings shared by every request a client sends.
///
/// Podio answers list and filter calls with large JSON bodies, so gzip and
/// deflate are accepted unless turned off. No retry settings exist: a
/// request is sent exactly once.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout, body included.
    pub timeout: Duration,
    /// TCP + TLS connect timeout; must not exceed `timeout`.
    pub connect_timeout: Duration,
    /// How long an idle pooled connection is kept.
    pub pool_idle_timeout: Duration,
    /// Idle connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Send `Accept-Encoding: gzip, deflate` and decode compressed bodies.
    pub compression: bool,
    /// Emit request/response events through `tracing`.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            compression: true,
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Start from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Reject settings reqwest would accept but that can never work.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(config_error("timeout must be greater than zero"));
        }
        if self.connect_timeout > self.timeout {
            return Err(config_error(format!(
                "connect timeout ({:?}) exceeds request timeout ({:?})",
                self.connect_timeout, self.timeout
            )));
        }
        if self.user_agent.trim().is_empty() {
            return Err(config_error("user agent must not be empty"));
        }
        Ok(())
    }

    /// A validated reqwest builder carrying these settings.
    pub(crate) fn reqwest_builder(&self) -> Result<reqwest::ClientBuilder> {
        self.validate()?;

        Ok(reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .pool_idle_timeout(self.pool_idle_timeout)
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .user_agent(&self.user_agent)
            .gzip(self.compression)
            .deflate(self.compression))
    }
}

fn config_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Config(message.into()))
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Accept gzip/deflate compressed responses.
    pub fn with_compression(mut self, enabled: bool) -> Self {
        self.config.compression = enabled;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Turn request/response tracing on or off (tests usually turn it off).
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
