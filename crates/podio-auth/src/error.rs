//! Error types for podio-auth.
//!
//! Error messages never carry token or secret values.

/// Result type alias for podio-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for podio-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// HTTP status of the failed exchange, if one was received.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::OAuth { status, .. } => Some(*status),
            ErrorKind::Http { status, .. } => *status,
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// OAuth error response from Podio (e.g. `invalid_grant`).
    #[error("OAuth error ({status}): {error} - {description}")]
    OAuth {
        status: u16,
        error: String,
        description: String,
    },

    /// Token expired.
    #[error("Token expired")]
    TokenExpired,

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// HTTP error during authentication.
    #[error("HTTP error: {message}")]
    Http {
        status: Option<u16>,
        message: String,
    },

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<podio_client::Error> for Error {
    fn from(err: podio_client::Error) -> Self {
        use podio_client::ErrorKind as ClientKind;

        let kind = match &err.kind {
            ClientKind::PodioApi {
                status,
                error,
                description,
            } => ErrorKind::OAuth {
                status: *status,
                error: error.clone(),
                description: description.clone(),
            },
            ClientKind::Json(msg) => ErrorKind::Json(msg.clone()),
            ClientKind::Serialization(msg) => ErrorKind::Serialization(msg.clone()),
            ClientKind::Config(msg) | ClientKind::InvalidUrl(msg) => ErrorKind::Config(msg.clone()),
            _ => ErrorKind::Http {
                status: err.status(),
                message: podio_client::sanitize_error_message(&err.to_string()),
            },
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("invalid API URL: {err}")), err)
    }
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::with_source(ErrorKind::EnvVar(err.to_string()), err)
    }
}
