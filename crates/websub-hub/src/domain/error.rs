//! Hub error types.
//!
//! `Display` on [`HubError`] yields only the short diagnostic that is sent
//! back to HTTP callers. The `detail` carried by the transport-level variants
//! is for logs and never leaves the process.

use std::fmt;
use thiserror::Error;

/// HTTP method of the outbound request an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutboundMethod {
    /// Verification request (challenge echo).
    Get,
    /// Delivery request (signed payload).
    Post,
}

impl OutboundMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutboundMethod::Get => "GET",
            OutboundMethod::Post => "POST",
        }
    }

    fn send_failure(&self) -> &'static str {
        match self {
            OutboundMethod::Get => "Failed sending GET request",
            OutboundMethod::Post => "Error sending POST request",
        }
    }
}

impl fmt::Display for OutboundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a single verification or delivery attempt.
///
/// None of these are fatal to the process, and none are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HubError {
    /// The callback URL could not be turned into a request.
    #[error("Failed creating {method} request")]
    RequestConstruction {
        method: OutboundMethod,
        detail: String,
    },

    /// Connection, send failure or timeout on the outbound request.
    #[error("{}", .method.send_failure())]
    Transport {
        method: OutboundMethod,
        detail: String,
    },

    /// The response body could not be read.
    #[error("Failed reading {method} response")]
    ResponseRead {
        method: OutboundMethod,
        detail: String,
    },

    /// The callback did not echo the challenge byte-for-byte.
    #[error("Bad challenge echoed")]
    ChallengeMismatch,

    /// Delivery was requested before any subscriber was verified.
    #[error("No subscriber")]
    NoSubscriber,
}

impl HubError {
    pub fn request_construction(method: OutboundMethod, detail: impl Into<String>) -> Self {
        HubError::RequestConstruction {
            method,
            detail: detail.into(),
        }
    }

    pub fn transport(method: OutboundMethod, detail: impl Into<String>) -> Self {
        HubError::Transport {
            method,
            detail: detail.into(),
        }
    }

    pub fn response_read(method: OutboundMethod, detail: impl Into<String>) -> Self {
        HubError::ResponseRead {
            method,
            detail: detail.into(),
        }
    }

    /// Internal detail for logging, if the variant carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            HubError::RequestConstruction { detail, .. }
            | HubError::Transport { detail, .. }
            | HubError::ResponseRead { detail, .. } => Some(detail),
            HubError::ChallengeMismatch | HubError::NoSubscriber => None,
        }
    }
}

/// Result type for hub operations
pub type HubResult<T> = Result<T, HubError>;

/// Configuration validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),

    #[error("invalid limit: {0}")]
    InvalidLimit(String),
}

/// Server-level errors (startup and serving, not per-request)
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Outbound HTTP client could not be built
    #[error("http client error: {0}")]
    Client(String),

    /// Server socket bind error
    #[error("server bind error: {0}")]
    Bind(#[source] std::io::Error),

    /// Error while serving connections
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
