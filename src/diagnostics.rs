//! Where result conversions report failures.
//!
//! Conversions never build a logger themselves. They write to a
//! [`DiagnosticSink`], which defaults to the `log` facade and can be swapped
//! out once per process with [`install`], or passed explicitly to the
//! `*_with` conversion functions.

use std::sync::OnceLock;

/// Receives diagnostic lines emitted while handling responses.
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Forwards diagnostics to the `log` crate under the `jpush_device` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn error(&self, message: &str) {
        log::error!(target: "jpush_device", "{}", message);
    }

    fn info(&self, message: &str) {
        log::info!(target: "jpush_device", "{}", message);
    }
}

static SINK: OnceLock<Box<dyn DiagnosticSink>> = OnceLock::new();

/// Returns the process-wide sink, initialising it to [`LogSink`] on first use.
pub fn sink() -> &'static dyn DiagnosticSink {
    SINK.get_or_init(|| Box::new(LogSink) as Box<dyn DiagnosticSink>)
        .as_ref()
}

/// Installs a process-wide sink.
///
/// Returns `false` when a sink is already in place (either installed earlier
/// or initialised by a previous call to [`sink`]).
pub fn install(sink: Box<dyn DiagnosticSink>) -> bool {
    SINK.set(sink).is_ok()
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DiagnosticSink;
    use std::sync::Mutex;

    /// Sink that keeps every line in memory as `(level, message)`.
    #[derive(Default)]
    pub struct RecordingSink {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl RecordingSink {
        pub fn lines(&self) -> Vec<(&'static str, String)> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(("error", message.to_string()));
        }

        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(("info", message.to_string()));
        }
    }
}
