//! Device and tag endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use jpush_device::{
//!     ApiRequest, ClientConfig, PushClient, ResponseWrapper, TagListResult, Transport,
//! };
//!
//! struct MyHttp;
//!
//! impl Transport for MyHttp {
//!     fn send(&self, request: &ApiRequest) -> anyhow::Result<ResponseWrapper> {
//!         // perform the call with your HTTP client and auth headers
//!         # let _ = request;
//!         Ok(ResponseWrapper::new(200, r#"{"tags": []}"#))
//!     }
//! }
//!
//! # fn example() -> Result<(), jpush_device::PushError> {
//! let client = PushClient::new(MyHttp, ClientConfig::from_env());
//! let tags: TagListResult = client.tags().list_result()?;
//! client.devices().add_tags("registration-id", "vip")?;
//! # Ok(())
//! # }
//! ```

mod devices;
mod tags;

pub use devices::Devices;
pub use tags::Tags;

use crate::config::ClientConfig;
use crate::error::PushError;
use crate::response::ResponseWrapper;
use crate::transport::{ApiRequest, Transport};

/// Entry point bundling a transport with its configuration.
pub struct PushClient<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> PushClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn devices(&self) -> Devices<'_, T> {
        Devices::new(self)
    }

    pub fn tags(&self) -> Tags<'_, T> {
        Tags::new(self)
    }

    /// Endpoint URL for `segments`, each one escaped.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<String, PushError> {
        self.config.url(segments)
    }

    pub(crate) fn send(&self, request: ApiRequest) -> Result<ResponseWrapper, PushError> {
        log::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(&request)?;
        log::debug!("{} {} -> {}", request.method, request.url, response.http_code);
        Ok(response)
    }
}

/// Rejects ids and tags that cannot stand as a single path segment.
pub(crate) fn path_segment<'s>(value: &'s str, what: &str) -> Result<&'s str, PushError> {
    if value.trim().is_empty() || value == "." || value == ".." {
        return Err(PushError::InvalidArgument(format!("invalid {what}: {value:?}")));
    }
    Ok(value)
}
