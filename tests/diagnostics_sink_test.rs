//! Runs in its own binary: the diagnostic sink is process-wide and can be
//! installed only once.

use jpush_device::diagnostics::{self, DiagnosticSink};
use jpush_device::{DeviceInfo, LogSink, ResponseWrapper, TagListResult};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedSink {
    lines: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl DiagnosticSink for SharedSink {
    fn error(&self, message: &str) {
        self.lines.lock().unwrap().push(("error", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.lines.lock().unwrap().push(("info", message.to_string()));
    }
}

#[test]
fn installed_sink_receives_conversion_diagnostics() {
    let sink = SharedSink::default();
    assert!(diagnostics::install(Box::new(sink.clone())));
    assert!(!diagnostics::install(Box::new(LogSink)));

    let ok = ResponseWrapper::new(200, r#"{"tags": ["a"]}"#);
    assert!(TagListResult::from_response(&ok).unwrap().is_ok);
    assert!(sink.lines.lock().unwrap().is_empty());

    let rejected = ResponseWrapper::new(
        400,
        r#"{"error": {"code": 7002, "message": "invalid registration id"}}"#,
    );
    let err = TagListResult::from_response(&rejected).unwrap_err();
    assert_eq!(err.connection().and_then(|c| c.code()), Some(7002));
    assert!(DeviceInfo::from_response(&rejected).is_err());

    let lines = sink.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        (
            "error",
            "Error response from JPush server. Should review and fix it.".to_string()
        )
    );
    assert_eq!(lines[1], ("info", "HTTP Status: 400".to_string()));
    assert_eq!(
        lines[2],
        ("info", "Error Message: 7002: invalid registration id".to_string())
    );
    assert_eq!(lines[3..], lines[..3]);
}
