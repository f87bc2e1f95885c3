//! Clusters sub-client.

use reqwest::{Method, StatusCode};

use crate::client::HeketiClient;
use crate::domain::cluster::{ClusterInfoResponse, ClusterListResponse};
use crate::error::HeketiResult;

/// Sub-client for cluster operations.
pub struct Clusters<'a> {
    pub(crate) client: &'a HeketiClient,
}

impl<'a> Clusters<'a> {
    /// `POST /clusters`, expects 201.
    pub async fn create(&self) -> HeketiResult<Option<ClusterInfoResponse>> {
        let resp = self
            .client
            .http
            .request(Method::POST, "/clusters", None)
            .await?;
        self.client.expect_json(&resp, StatusCode::CREATED)
    }

    pub async fn info(&self, cluster_id: &str) -> HeketiResult<Option<ClusterInfoResponse>> {
        let path = format!("/clusters/{}", urlencoding::encode(cluster_id));
        let resp = self.client.http.request(Method::GET, &path, None).await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    pub async fn list(&self) -> HeketiResult<Option<ClusterListResponse>> {
        let resp = self
            .client
            .http
            .request(Method::GET, "/clusters", None)
            .await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    /// `DELETE /clusters/{id}`, true on 200.
    pub async fn delete(&self, cluster_id: &str) -> HeketiResult<bool> {
        let path = format!("/clusters/{}", urlencoding::encode(cluster_id));
        let resp = self.client.http.request(Method::DELETE, &path, None).await?;
        self.client.expect_status(&resp, StatusCode::OK)
    }
}
