use super::{PushClient, path_segment};
use crate::error::PushError;
use crate::model::DeviceInfo;
use crate::request::{DeviceUpdate, TagInput};
use crate::response::ResponseWrapper;
use crate::transport::{ApiRequest, Transport};

/// `/v3/devices/{registration_id}` endpoints.
///
/// Calls return the raw [`ResponseWrapper`] so the HTTP status can be
/// inspected; only argument and transport failures are errors here.
pub struct Devices<'a, T: Transport> {
    client: &'a PushClient<T>,
}

impl<'a, T: Transport> Devices<'a, T> {
    pub(super) fn new(client: &'a PushClient<T>) -> Self {
        Self { client }
    }

    fn url(&self, registration_id: &str) -> Result<String, PushError> {
        let registration_id = path_segment(registration_id, "registration id")?;
        self.client.url(&["v3", "devices", registration_id])
    }

    /// Tags, alias and mobile of a device.
    pub fn show(&self, registration_id: &str) -> Result<ResponseWrapper, PushError> {
        self.client.send(ApiRequest::get(self.url(registration_id)?))
    }

    /// [`show`](Self::show) converted into a [`DeviceInfo`].
    pub fn info(&self, registration_id: &str) -> Result<DeviceInfo, PushError> {
        DeviceInfo::from_response(&self.show(registration_id)?)
    }

    pub fn update(
        &self,
        registration_id: &str,
        update: DeviceUpdate,
    ) -> Result<ResponseWrapper, PushError> {
        let url = self.url(registration_id)?;
        let body = update.into_body()?;
        self.client.send(ApiRequest::post(url, body))
    }

    pub fn add_tags(
        &self,
        registration_id: &str,
        tags: impl Into<TagInput>,
    ) -> Result<ResponseWrapper, PushError> {
        self.update(registration_id, DeviceUpdate::new().add_tags(tags)?)
    }

    pub fn remove_tags(
        &self,
        registration_id: &str,
        tags: impl Into<TagInput>,
    ) -> Result<ResponseWrapper, PushError> {
        self.update(registration_id, DeviceUpdate::new().remove_tags(tags)?)
    }

    pub fn clear_tags(&self, registration_id: &str) -> Result<ResponseWrapper, PushError> {
        self.update(registration_id, DeviceUpdate::new().clear_tags())
    }

    /// An empty alias removes the current one.
    pub fn update_alias(
        &self,
        registration_id: &str,
        alias: &str,
    ) -> Result<ResponseWrapper, PushError> {
        self.update(registration_id, DeviceUpdate::new().alias(alias))
    }

    pub fn update_mobile(
        &self,
        registration_id: &str,
        mobile: &str,
    ) -> Result<ResponseWrapper, PushError> {
        self.update(registration_id, DeviceUpdate::new().mobile(mobile))
    }
}
