//! Unified client error types.

use std::time::Duration;

use thiserror::Error;

/// Top-level client error.
#[derive(Error, Debug)]
pub enum HeketiError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The server answered with a success code other than the one the
    /// operation expects. Only raised when strict status checking is on.
    #[error("Unexpected status: expected {expected}, got {actual}")]
    UnexpectedStatus { expected: u16, actual: u16 },
}

impl HeketiError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            Self::UnexpectedStatus { actual, .. } => Some(*actual),
            _ => None,
        }
    }
}

/// Result alias used throughout the client.
pub type HeketiResult<T> = Result<T, HeketiError>;

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Client error {status}: {body}")]
    ClientError { status: u16, body: String },

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Response {status} is missing the Location header")]
    MissingLocation { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Followed {limit} result redirects without reaching a final response")]
    TooManyRedirects { limit: u32 },

    #[error("Operation still pending after {0:?}")]
    PollTimeout(Duration),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

impl HttpError {
    /// Map a failure status and its body to the matching variant.
    pub(crate) fn from_status(status: u16, body: String) -> Self {
        match status {
            401 => Self::Unauthorized(body),
            404 => Self::NotFound(body),
            409 => Self::Conflict(body),
            400..=499 => Self::ClientError { status, body },
            _ => Self::ServerError { status, body },
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Reqwest(e) => e.status().map(|s| s.as_u16()),
            Self::Unauthorized(_) => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Conflict(_) => Some(409),
            Self::ClientError { status, .. } | Self::ServerError { status, .. } => Some(*status),
            Self::MissingLocation { status } => Some(*status),
            _ => None,
        }
    }

    /// Response body carried by this error, if any.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Unauthorized(body) | Self::NotFound(body) | Self::Conflict(body) => Some(body),
            Self::ClientError { body, .. } | Self::ServerError { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Token signing errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Signing key is empty")]
    EmptySecret,

    #[error("Token encoding failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),

    #[error("Token is not a valid header value")]
    InvalidHeader,
}
