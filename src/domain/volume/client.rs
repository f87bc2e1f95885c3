//! Volumes sub-client.

use reqwest::{Method, StatusCode};

use crate::client::HeketiClient;
use crate::domain::volume::{
    VolumeCreateRequest, VolumeExpandRequest, VolumeInfoResponse, VolumeListResponse,
};
use crate::error::HeketiResult;

/// Sub-client for volume operations.
pub struct Volumes<'a> {
    pub(crate) client: &'a HeketiClient,
}

impl<'a> Volumes<'a> {
    pub async fn create(
        &self,
        request: &VolumeCreateRequest,
    ) -> HeketiResult<Option<VolumeInfoResponse>> {
        let body = serde_json::to_value(request)?;
        let resp = self
            .client
            .http
            .request(Method::POST, "/volumes", Some(&body))
            .await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    pub async fn list(&self) -> HeketiResult<Option<VolumeListResponse>> {
        let resp = self
            .client
            .http
            .request(Method::GET, "/volumes", None)
            .await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    pub async fn info(&self, volume_id: &str) -> HeketiResult<Option<VolumeInfoResponse>> {
        let path = format!("/volumes/{}", urlencoding::encode(volume_id));
        let resp = self.client.http.request(Method::GET, &path, None).await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    /// Grow a volume by `expand_size` GiB.
    pub async fn expand(
        &self,
        volume_id: &str,
        expand_size: u64,
    ) -> HeketiResult<Option<VolumeInfoResponse>> {
        let path = format!("/volumes/{}/expand", urlencoding::encode(volume_id));
        let body = serde_json::to_value(VolumeExpandRequest { expand_size })?;
        let resp = self
            .client
            .http
            .request(Method::POST, &path, Some(&body))
            .await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    /// `DELETE /volumes/{id}`, true on 204.
    pub async fn delete(&self, volume_id: &str) -> HeketiResult<bool> {
        let path = format!("/volumes/{}", urlencoding::encode(volume_id));
        let resp = self.client.http.request(Method::DELETE, &path, None).await?;
        self.client.expect_status(&resp, StatusCode::NO_CONTENT)
    }
}
