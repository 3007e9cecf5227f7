//! The completed HTTP response handed over by the transport.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error payload reported by the push service, e.g. `{"code": 7002, "message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: i64,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Read access to a response that has already finished its I/O.
///
/// Result models only ever see a response through this trait, so any
/// transport can feed them.
pub trait ApiResponse {
    fn http_code(&self) -> u16;
    fn error_info(&self) -> Option<&ErrorInfo>;
    fn response_body(&self) -> &str;
}

/// Status, raw body and parsed error of one completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseWrapper {
    pub http_code: u16,
    pub body: String,
    pub error: Option<ErrorInfo>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorInfo,
}

impl ResponseWrapper {
    /// Wraps a status and body, picking the error payload out of non-200 bodies.
    ///
    /// Bodies that do not look like `{"error": {...}}` leave `error` empty.
    pub fn new(http_code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let error = if http_code == 200 {
            None
        } else {
            serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .map(|envelope| envelope.error)
        };
        Self {
            http_code,
            body,
            error,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.http_code == 200
    }

    /// Parses the body as untyped JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

impl ApiResponse for ResponseWrapper {
    fn http_code(&self) -> u16 {
        self.http_code
    }

    fn error_info(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    fn response_body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_is_extracted_from_failed_response() {
        let wrapper = ResponseWrapper::new(
            400,
            r#"{"error": {"code": 7002, "message": "invalid registration id"}}"#,
        );
        assert!(!wrapper.is_ok());
        assert_eq!(
            wrapper.error_info(),
            Some(&ErrorInfo::new(7002, "invalid registration id"))
        );
    }

    #[test]
    fn test_success_response_has_no_error() {
        let wrapper = ResponseWrapper::new(200, r#"{"error": {"code": 1, "message": "x"}}"#);
        assert!(wrapper.is_ok());
        assert!(wrapper.error_info().is_none());
    }

    #[test]
    fn test_unrecognised_error_body_is_tolerated() {
        let wrapper = ResponseWrapper::new(502, "<html>Bad Gateway</html>");
        assert!(wrapper.error.is_none());
        assert_eq!(wrapper.response_body(), "<html>Bad Gateway</html>");
        assert!(wrapper.json().is_err());
    }

    #[test]
    fn test_json_body() {
        let wrapper = ResponseWrapper::new(200, r#"{"tags": ["a"]}"#);
        assert_eq!(wrapper.json().unwrap()["tags"][0], "a");
    }

    #[test]
    fn test_error_info_display() {
        assert_eq!(ErrorInfo::new(1011, "cannot find user").to_string(), "1011: cannot find user");
    }
}
