//! Error types for player-search
//!
//! This module defines the errors that can occur while building a
//! request, talking to the remote service, or reading CLI input.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a request to the player-search service
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("request timed out after {}s, the server may be processing a large search", .0.as_secs())]
    Timeout(Duration),

    #[error("error calling API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server answered with HTTP {status} {reason}")]
    HttpStatus { status: u16, reason: String },

    #[error("malformed JSON payload: {0}")]
    MalformedPayload(String),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    /// Classify a reqwest failure, keeping the configured bound for timeouts
    pub fn classify(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            RequestError::Timeout(timeout)
        } else if let Some(status) = error.status() {
            RequestError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            }
        } else {
            RequestError::Transport(error)
        }
    }

    /// Short label of the failure class, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            RequestError::Timeout(_) => "timeout",
            RequestError::Transport(_) => "transport",
            RequestError::HttpStatus { .. } => "http-status",
            RequestError::MalformedPayload(_) => "malformed-payload",
            RequestError::InvalidUrl(_) => "invalid-url",
        }
    }
}

/// Recoverable errors in user-supplied arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("invalid max results '{0}', expected a positive integer")]
    InvalidMaxResults(String),
}

/// Result type for request operations
pub type Result<T> = std::result::Result<T, RequestError>;
