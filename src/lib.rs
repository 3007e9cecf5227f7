//! 'jpush-device' - Device and tag management for the JPush REST API.
//!
//! The crate describes requests (tag, alias and mobile updates), hands them to
//! a caller-supplied [`Transport`], and turns the completed responses into
//! typed results. A non-200 status becomes [`PushError::Connection`], a body
//! that is not the expected JSON becomes [`PushError::Parse`].
//!
//! ```
//! use jpush_device::{ResponseWrapper, TagListResult};
//!
//! let wrapper = ResponseWrapper::new(200, r#"{"tags": ["a", "b"]}"#);
//! let result = TagListResult::from_response(&wrapper).unwrap();
//! assert!(result.is_ok);
//! assert_eq!(result.to_json().unwrap(), r#"{"tags":["a","b"]}"#);
//! ```

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod request;
pub mod response;
pub mod transport;

pub use api::PushClient;
pub use config::ClientConfig;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::{ApiConnectionError, PushError};
pub use model::{DeviceInfo, TagListResult};
pub use request::{DeviceUpdate, TagInput, build_tags};
pub use response::{ApiResponse, ErrorInfo, ResponseWrapper};
pub use transport::{ApiRequest, Method, Transport};
