//! Typed results built from completed responses.

mod device;
mod tag_list;

pub use device::DeviceInfo;
pub use tag_list::TagListResult;

use crate::diagnostics::DiagnosticSink;
use crate::error::{ApiConnectionError, PushError};
use crate::response::ApiResponse;

/// Gatekeeper shared by every result model.
///
/// Returns the body of a 200 response. Anything else is reported to `sink`
/// and turned into [`PushError::Connection`].
pub fn check_response<'a, R>(
    wrapper: &'a R,
    sink: &dyn DiagnosticSink,
) -> Result<&'a str, PushError>
where
    R: ApiResponse + ?Sized,
{
    let http_code = wrapper.http_code();
    if http_code != 200 {
        sink.error("Error response from JPush server. Should review and fix it.");
        sink.info(&format!("HTTP Status: {}", http_code));
        match wrapper.error_info() {
            Some(info) => sink.info(&format!("Error Message: {}", info)),
            None => sink.info("Error Message: none"),
        }
        return Err(ApiConnectionError::new(http_code, wrapper.error_info().cloned()).into());
    }
    Ok(wrapper.response_body())
}
