//! Typed failures of backend calls and their user-facing messages.

use super::types::ErrorBody;
use thiserror::Error;

/// Message shown whenever the search endpoint answers `429 Too Many Requests`.
pub const RATE_LIMIT_MESSAGE: &str =
    "Rate limit exceeded. Please wait a minute before searching again.";

/// The backend call an error came from. Picks the fallback message and
/// whether `429` is reported as rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Summarize,
    Health,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Search => "Search failed",
            Operation::Summarize => "Summarization failed",
            Operation::Health => "Health check failed",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::Search => "/api/search",
            Operation::Summarize => "/api/summarize",
            Operation::Health => "/api/health",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimited,

    /// Any other non-2xx answer. `message` is the body's `detail` or the
    /// operation's fallback.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Map a non-2xx status and its raw body to an error.
    ///
    /// For searches a `429` always yields [`ApiError::RateLimited`], whatever
    /// the body says.
    pub fn from_status(operation: Operation, status: u16, body: &str) -> Self {
        if status == 429 && operation == Operation::Search {
            return ApiError::RateLimited;
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.detail().map(str::to_string))
            .unwrap_or_else(|| operation.fallback_message().to_string());

        ApiError::Status { status, message }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited)
    }

    /// HTTP status of the failure, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RateLimited => Some(429),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}
