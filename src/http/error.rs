//! Error types for the JSON fetch client.
//!
//! Every failure of [`fetch_json`](super::fetch_json) is normalized into one
//! of these variants. The client always returns `Err`; it never hands back a
//! response object that secretly describes a failure.

use std::time::Duration;

use thiserror::Error;

/// Status reported for client-side timeouts (HTTP 408 Request Timeout).
pub const TIMEOUT_STATUS: u16 = 408;

/// Errors that can occur while performing a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The timer won the race against the network call.
    #[error("Request took too long (gave up after {}ms)", .after.as_millis())]
    TimedOut { after: Duration },

    /// The server answered with a non-2xx status. `message` is the body text.
    #[error("{message}")]
    Http {
        status: u16,
        status_text: String,
        message: String,
    },

    /// Transport failure (DNS, connect, reset, body read).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON body could not be decoded.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configured header name or value is not valid HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The request task was cancelled before it finished or timed out.
    #[error("Request was cancelled")]
    Cancelled,
}

impl FetchError {
    /// HTTP-ish status for this error, when one applies.
    ///
    /// Timeouts report 408. Transport errors report the status carried by
    /// the underlying `reqwest::Error`, which is usually `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::TimedOut { .. } => Some(TIMEOUT_STATUS),
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Network(err) => err.status().map(|s| s.as_u16()),
            FetchError::Decode(_) | FetchError::InvalidHeader(_) | FetchError::Cancelled => None,
        }
    }

    /// Reason phrase paired with [`FetchError::status`].
    pub fn status_text(&self) -> Option<&str> {
        match self {
            FetchError::TimedOut { .. } => Some("Request Timeout"),
            FetchError::Http { status_text, .. } => Some(status_text.as_str()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::TimedOut { .. })
    }

    /// Short machine-readable kind, used in log fields.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::TimedOut { .. } => "timed_out",
            FetchError::Http { .. } => "http_error",
            FetchError::Network(_) => "network_error",
            FetchError::Decode(_) => "decode_error",
            FetchError::InvalidHeader(_) => "invalid_header",
            FetchError::Cancelled => "cancelled",
        }
    }
}
