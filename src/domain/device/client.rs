//! Devices sub-client.

use reqwest::{Method, StatusCode};

use crate::client::HeketiClient;
use crate::domain::device::{DeviceAddRequest, DeviceInfoResponse};
use crate::error::HeketiResult;

/// Sub-client for device operations.
pub struct Devices<'a> {
    pub(crate) client: &'a HeketiClient,
}

impl<'a> Devices<'a> {
    /// `POST /devices`, true on 204.
    pub async fn add(&self, request: &DeviceAddRequest) -> HeketiResult<bool> {
        let body = serde_json::to_value(request)?;
        let resp = self
            .client
            .http
            .request(Method::POST, "/devices", Some(&body))
            .await?;
        self.client.expect_status(&resp, StatusCode::NO_CONTENT)
    }

    pub async fn info(&self, device_id: &str) -> HeketiResult<Option<DeviceInfoResponse>> {
        let path = format!("/devices/{}", urlencoding::encode(device_id));
        let resp = self.client.http.request(Method::GET, &path, None).await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    /// `DELETE /devices/{id}`, true on 204.
    pub async fn delete(&self, device_id: &str) -> HeketiResult<bool> {
        let path = format!("/devices/{}", urlencoding::encode(device_id));
        let resp = self.client.http.request(Method::DELETE, &path, None).await?;
        self.client.expect_status(&resp, StatusCode::NO_CONTENT)
    }
}
