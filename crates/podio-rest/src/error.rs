//! Error types for podio-rest.

/// Result type alias for podio-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for podio-rest operations.
///
/// Executors report failures inside [`podio_client::ApiResponse`]; this
/// type covers client construction and builders that validate their input.
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

    /// Shorthand for an [`ErrorKind::InvalidInput`] error.
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Error from the underlying client.
    #[error("Client error: {0}")]
    Client(String),

    /// A builder argument was rejected before any request was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Query string or payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<podio_client::Error> for Error {
    fn from(err: podio_client::Error) -> Self {
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}
