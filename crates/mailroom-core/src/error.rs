//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur while talking to the mail backend.
///
/// Variants carry rendered messages rather than source errors so the type
/// stays `Clone` and can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The request never reached the server or no response came back.
    #[error("Network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("API error ({status}){}", api_suffix(.message))]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, if any.
        message: Option<String>,
    },

    /// A success response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether a failed idempotent request may be retried.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Api {
                status: status.as_u16(),
                message: None,
            }
        } else if err.is_builder() {
            Self::Config(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

fn api_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
