use crate::diagnostics::{self, DiagnosticSink};
use crate::error::PushError;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The tags currently defined for an application (or attached to a device).
///
/// Elements are kept exactly as the server sent them; [`tag_names`](Self::tag_names)
/// gives the string view. `is_ok` is only ever `true` on a value produced by
/// [`TagListResult::from_response`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TagListResult {
    pub tags: Option<Vec<Value>>,
    #[serde(skip)]
    pub is_ok: bool,
}

#[derive(Deserialize)]
struct TagListBody {
    #[serde(default)]
    tags: Option<Vec<Value>>,
}

impl TagListResult {
    /// An unpopulated result: no tags, `is_ok == false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a completed response, reporting failures to the process-wide sink.
    pub fn from_response<R: ApiResponse + ?Sized>(wrapper: &R) -> Result<Self, PushError> {
        Self::from_response_with(wrapper, diagnostics::sink())
    }

    /// Same as [`from_response`](Self::from_response) with an explicit sink.
    ///
    /// A missing `"tags"` key yields `tags == None` rather than an error.
    pub fn from_response_with<R: ApiResponse + ?Sized>(
        wrapper: &R,
        sink: &dyn DiagnosticSink,
    ) -> Result<Self, PushError> {
        let body = super::check_response(wrapper, sink)?;
        let parsed: TagListBody = serde_json::from_str(body)?;
        Ok(Self {
            tags: parsed.tags,
            is_ok: true,
        })
    }

    /// The string elements of `tags`, in order. Other element types are skipped.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().flatten().filter_map(Value::as_str).collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tag_names().contains(&tag)
    }

    /// Serializes to `{"tags": [...]}`, or `{"tags": null}` when unpopulated.
    pub fn to_json(&self) -> Result<String, PushError> {
        Ok(serde_json::to_string(self)?)
    }
}
