//! Error types and handling for gyan-core operations.
//!
//! Failures are categorized so that the content loader can classify them into a
//! degraded-mode reason: transport problems, non-success HTTP statuses, and
//! application-level errors reported inside an otherwise successful response are
//! all distinct variants. Errors also carry a hint about whether a retry might
//! succeed.

use thiserror::Error;

/// The main error type for gyan-core operations.
///
/// All fallible functions in gyan-core return `Result<T, Error>`. Note that
/// [`ContentLoader::load`](crate::ContentLoader::load) deliberately does *not*
/// return this type: it absorbs every variant into a degraded state so the
/// caller always has renderable content.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers reading configuration files and fallback dataset overrides from
    /// disk. The underlying `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed before a response was received.
    ///
    /// Covers connection failures, DNS resolution, TLS problems, and request
    /// timeouts. This is the transport-level half of the failure taxonomy; a
    /// server that answered with a non-2xx status is [`Error::Server`] instead.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The content API answered with a non-success HTTP status.
    #[error("Server error: content API returned HTTP {status}")]
    Server {
        /// Status code returned by the server (e.g. 500, 503).
        status: u16,
    },

    /// The content API reported an application-level error.
    ///
    /// GraphQL endpoints return HTTP 200 with an `errors` array when the query
    /// itself fails; the first reported message is carried here. A well-formed
    /// response with no usable data is also classified as this variant.
    #[error("Content API error: {0}")]
    Api(String),

    /// Serialization or deserialization failed.
    ///
    /// Occurs when a response body or a TOML document cannot be decoded into
    /// the expected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Returns `true` for errors that are typically temporary: connection
    /// failures, timeouts, and 5xx server responses. Parse failures and
    /// invalid configuration are permanent.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Server { status } => *status >= 500,
            Self::Io(e) => {
                matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
                )
            },
            Self::Api(_) | Self::Serialization(_) | Self::Config(_) => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Used for structured logging and for mapping failures onto the degraded
    /// reason surfaced to users.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Server { .. } => "server",
            Self::Api(_) => "api",
            Self::Serialization(_) => "serialization",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
