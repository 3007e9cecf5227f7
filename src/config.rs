//! Client configuration.

use crate::error::PushError;
use std::env;
use url::Url;

/// Default endpoint of the device API.
pub const DEFAULT_BASE_URL: &str = "https://device.jpush.cn";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "JPUSH_DEVICE_URL";

/// Where the device and tag endpoints live.
///
/// # Examples
///
/// ```
/// use jpush_device::ClientConfig;
///
/// let config = ClientConfig::default().with_base_url("http://localhost:8080/");
/// assert_eq!(config.base_url, "http://localhost:8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing `/`.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the environment.
    ///
    /// Environment variables:
    /// - `JPUSH_DEVICE_URL` (optional, defaults to `https://device.jpush.cn`)
    pub fn from_env() -> Self {
        match env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::default().with_base_url(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    ///
    /// A trailing `""` segment produces a trailing `/`.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<String, PushError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| {
                PushError::InvalidArgument(format!(
                    "base URL cannot take a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }
}
