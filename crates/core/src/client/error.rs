//! Error types for the t411 client.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Message returned when a previous session token does not have the
/// `<uid>:<seq>:<opaque>` shape.
pub const INVALID_TOKEN_MESSAGE: &str =
    "invalid token format, must be of the form 12345:123:abcdefghijklmnopqr";

/// Error envelope returned by the API, often with HTTP 200.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: i64,
    #[serde(default, rename = "error")]
    pub text: String,
}

impl ApiError {
    pub fn new(code: i64, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    /// Classify the error code.
    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_code(self.code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}

impl std::error::Error for ApiError {}

/// Known API error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 101
    UserNotFound,
    /// 103
    AccountDisabled,
    /// 107
    WrongPassword,
    /// 201
    TokenExpired,
    /// 301 on details, 1301 on download.
    TorrentNotFound,
    Other,
}

impl ApiErrorKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            101 => ApiErrorKind::UserNotFound,
            103 => ApiErrorKind::AccountDisabled,
            107 => ApiErrorKind::WrongPassword,
            201 => ApiErrorKind::TokenExpired,
            301 | 1301 => ApiErrorKind::TorrentNotFound,
            _ => ApiErrorKind::Other,
        }
    }
}

/// Input the caller has to fix; never retried.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{}", INVALID_TOKEN_MESSAGE)]
    InvalidToken,

    #[error("invalid Content-Disposition header: {0}")]
    ContentDisposition(String),
}

/// Errors that can occur when talking to the t411 API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS or timeout failure.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status whose body was not an API error envelope.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    /// Error envelope returned by the API.
    #[error("API error {0}")]
    Api(#[from] ApiError),

    /// Payload did not match the expected shape after repair.
    #[error("Failed to decode response of '{endpoint}' for query '{query}': {source}")]
    Decode {
        endpoint: String,
        query: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Torrent not found: {0}")]
    TorrentNotFound(String),

    #[error("Download refused, ratio would drop to {ratio:.3}")]
    RatioTooLow { ratio: f64 },

    #[error("Download refused, torrent {0} is not verified")]
    NotVerified(String),

    #[error("No token, client is not authenticated")]
    NoToken,

    #[error("Invalid value '{value}' for field '{field}'")]
    InvalidField { field: &'static str, value: String },

    /// The probe issued while resuming a previous session failed.
    #[error("Failed to resume session: {0}")]
    ResumeFailed(#[source] Box<ClientError>),
}

impl ClientError {
    /// The API error envelope, if this error carries one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(e) => Some(e),
            ClientError::ResumeFailed(inner) => inner.api_error(),
            _ => None,
        }
    }

    /// True for an empty result list and for the API's 301/1301 codes.
    pub fn is_torrent_not_found(&self) -> bool {
        match self {
            ClientError::TorrentNotFound(_) => true,
            _ => self
                .api_error()
                .is_some_and(|e| e.kind() == ApiErrorKind::TorrentNotFound),
        }
    }

    pub fn is_token_expired(&self) -> bool {
        self.api_error()
            .is_some_and(|e| e.kind() == ApiErrorKind::TokenExpired)
    }
}
