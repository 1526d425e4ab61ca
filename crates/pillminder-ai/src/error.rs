//! Error types for calls to the completion service.

use thiserror::Error;

/// Failure of a single outbound completion request.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// No API key is available, so no request was sent.
    #[error("completion service is not configured")]
    NotConfigured,
    /// No reply within the configured timeout.
    #[error("completion service timed out")]
    Timeout,
    /// The service answered with a non-success status.
    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Connecting or transferring failed.
    #[error("completion request failed: {0}")]
    Transport(String),
    /// The reply was not JSON.
    #[error("completion reply was malformed: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
