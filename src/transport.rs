//! The seam between the SDK and whatever performs HTTP.
//!
//! Authentication, connection handling and retries belong to the
//! [`Transport`] implementation; the SDK only describes requests and reads
//! completed responses.

use crate::response::ResponseWrapper;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent: method, absolute URL and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            body: Some(body),
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }
}

/// Sends a request and hands back the completed response.
///
/// Non-200 statuses are *not* errors at this level; only failures to get a
/// response at all (timeouts, DNS, TLS, ...) are.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> anyhow::Result<ResponseWrapper>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> anyhow::Result<ResponseWrapper> {
        (**self).send(request)
    }
}
