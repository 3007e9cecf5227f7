//! Error types shared by every part of the SDK.

use crate::response::ErrorInfo;
use thiserror::Error;

/// A non-200 answer from the push service.
///
/// Carries the HTTP status and whatever error payload the server reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {http_code}{}", payload_suffix(.error))]
pub struct ApiConnectionError {
    pub http_code: u16,
    pub error: Option<ErrorInfo>,
}

fn payload_suffix(error: &Option<ErrorInfo>) -> String {
    error
        .as_ref()
        .map(|info| format!(" ({})", info))
        .unwrap_or_default()
}

impl ApiConnectionError {
    pub fn new(http_code: u16, error: Option<ErrorInfo>) -> Self {
        Self { http_code, error }
    }

    /// The server-side error code (e.g. `7002` for an unknown registration id).
    pub fn code(&self) -> Option<i64> {
        self.error.as_ref().map(|e| e.code)
    }

    pub fn message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }
}

/// Errors returned by the SDK.
#[derive(Debug, Error)]
pub enum PushError {
    /// The server answered with a status other than 200.
    #[error("Error response from JPush server: {0}")]
    Connection(ApiConnectionError),

    /// The response body was not valid JSON for the expected shape.
    #[error("Malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// A request was rejected before being sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The transport failed to complete the request.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl PushError {
    pub fn is_connection(&self) -> bool {
        matches!(self, PushError::Connection(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, PushError::Parse(_))
    }

    /// Returns the connection error if this is one.
    pub fn connection(&self) -> Option<&ApiConnectionError> {
        match self {
            PushError::Connection(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiConnectionError> for PushError {
    fn from(err: ApiConnectionError) -> Self {
        PushError::Connection(err)
    }
}
