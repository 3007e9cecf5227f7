use crate::diagnostics::{self, DiagnosticSink};
use crate::error::PushError;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the service knows about one registration id.
///
/// `mobile` stays a raw JSON value: the service sends it back as a number
/// even though updates send it as a string. Tag elements are kept as sent,
/// like [`TagListResult`](super::TagListResult).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    #[serde(default)]
    pub tags: Option<Vec<Value>>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub mobile: Option<Value>,
}

impl DeviceInfo {
    pub fn from_response<R: ApiResponse + ?Sized>(wrapper: &R) -> Result<Self, PushError> {
        Self::from_response_with(wrapper, diagnostics::sink())
    }

    pub fn from_response_with<R: ApiResponse + ?Sized>(
        wrapper: &R,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, PushError> {
        let body = super::check_response(wrapper, sink)?;
        Ok(serde_json::from_str(body)?)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().flatten().any(|t| t.as_str() == Some(tag))
    }

    pub fn to_json(&self) -> Result<String, PushError> {
        Ok(serde_json::to_string(self)?)
    }
}
