use super::{PushClient, path_segment};
use crate::error::PushError;
use crate::model::TagListResult;
use crate::response::ResponseWrapper;
use crate::transport::{ApiRequest, Transport};

/// `/v3/tags/` endpoints.
pub struct Tags<'a, T: Transport> {
    client: &'a PushClient<T>,
}

impl<'a, T: Transport> Tags<'a, T> {
    pub(super) fn new(client: &'a PushClient<T>) -> Self {
        Self { client }
    }

    /// Every tag defined for the application.
    pub fn list(&self) -> Result<ResponseWrapper, PushError> {
        let url = self.client.url(&["v3", "tags", ""])?;
        self.client.send(ApiRequest::get(url))
    }

    pub fn list_result(&self) -> Result<TagListResult, PushError> {
        TagListResult::from_response(&self.list()?)
    }

    /// Removes a tag from every device that carries it.
    pub fn delete(&self, tag: &str) -> Result<ResponseWrapper, PushError> {
        let tag = path_segment(tag, "tag")?;
        let url = self.client.url(&["v3", "tags", tag])?;
        self.client.send(ApiRequest::delete(url))
    }
}
