//! Error

use headline_api::mdl::FeedResponse;

/// Message shown to the reader whenever a page cannot be loaded
pub const FAILURE_MESSAGE: &str = "Failed to fetch news. Please try again later.";

/// Client error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed
    #[error("network error: {message}")]
    Network {
        /// Error message
        message: String,
    },
    /// The gateway answered with a failure or an unreadable payload
    #[error("upstream error: {message}")]
    Upstream {
        /// HTTP status, if one was received
        status: Option<u16>,
        /// Error message
        message: String,
    },
    /// The query cannot be sent
    #[error("invalid query: {message}")]
    InvalidQuery {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Returns the message to display
    ///
    /// Causes are not told apart for the reader.
    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }

    /// Builds an error from a failure envelope
    pub(crate) fn from_envelope(status: u16, value: FeedResponse) -> Self {
        Error::Upstream {
            status: Some(status),
            message: value
                .message
                .unwrap_or_else(|| "the gateway returned no data".to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() || value.is_status() {
            Error::Upstream {
                status: value.status().map(|s| s.as_u16()),
                message: value.to_string(),
            }
        } else {
            Error::Network {
                message: value.to_string(),
            }
        }
    }
}
