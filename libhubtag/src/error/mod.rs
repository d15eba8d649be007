//! Error types shared across the library.
//!
//! Every fallible operation returns [`Result`], and every failure mode is
//! collapsed into [`HubError`] so callers can match on the kind of failure
//! without digging through source chains.

use thiserror::Error;


/// Error type for all hub operations.
#[derive(Error, Debug)]
pub enum HubError {
    /// Transport-level failures: connection refused, DNS, timeouts.
    #[error("network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The hub demanded credentials this toolkit never sends, typically for
    /// a private repository.
    #[error("authentication error (status: {status:?}): {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
    },

    /// A repository, tag, or local file that does not exist.
    #[error("{kind} not found: {name}")]
    NotFound { kind: String, name: String },

    /// The hub is throttling requests (HTTP 429).
    #[error("rate limited: {message}")]
    RateLimit { message: String },

    /// The hub reported a server-side failure (5xx).
    #[error("server error (status {status}): {message}")]
    Server { message: String, status: u16 },

    /// Invalid input, or a response body that could not be made sense of.
    #[error("validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client setup problems, such as an unusable base URL.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for hub operations.
pub type Result<T> = std::result::Result<T, HubError>;

impl HubError {
    /// Creates a new network error without an underlying cause.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error wrapping the error that caused it.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubError;
    /// use std::io;
    ///
    /// let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    /// let err = HubError::network_with_source("request failed", cause);
    /// assert!(matches!(err, HubError::Network { .. }));
    /// ```
    pub fn network_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new authentication error with the HTTP status that triggered it.
    pub fn authentication(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status,
        }
    }

    /// Creates a new not-found error for a named resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::error::HubError;
    ///
    /// let err = HubError::not_found("repository", "library/telegraf");
    /// assert!(err.to_string().contains("library/telegraf"));
    /// ```
    pub fn not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates a new rate-limit error.
    pub fn rate_limit(message: impl Into<String>) -> Self {
        Self::RateLimit {
            message: message.into(),
        }
    }

    /// Creates a new server error carrying the HTTP status code.
    pub fn server(message: impl Into<String>, status: u16) -> Self {
        Self::Server {
            message: message.into(),
            status,
        }
    }

    /// Creates a new validation error without an underlying cause.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new validation error wrapping the error that caused it.
    pub fn validation_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Validation {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new configuration error wrapping the error that caused it.
    pub fn config_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
