//! Nodes sub-client.

use reqwest::{Method, StatusCode};

use crate::client::HeketiClient;
use crate::domain::node::{NodeAddRequest, NodeInfoResponse};
use crate::error::HeketiResult;

/// Sub-client for node operations.
pub struct Nodes<'a> {
    pub(crate) client: &'a HeketiClient,
}

impl<'a> Nodes<'a> {
    /// Register a node with a cluster. The server answers 202 and the
    /// node is returned once the peer probe completes.
    pub async fn add(&self, request: &NodeAddRequest) -> HeketiResult<Option<NodeInfoResponse>> {
        let body = serde_json::to_value(request)?;
        let resp = self
            .client
            .http
            .request(Method::POST, "/nodes", Some(&body))
            .await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    pub async fn info(&self, node_id: &str) -> HeketiResult<Option<NodeInfoResponse>> {
        let path = format!("/nodes/{}", urlencoding::encode(node_id));
        let resp = self.client.http.request(Method::GET, &path, None).await?;
        self.client.expect_json(&resp, StatusCode::OK)
    }

    /// `DELETE /nodes/{id}`, true on 204.
    pub async fn delete(&self, node_id: &str) -> HeketiResult<bool> {
        let path = format!("/nodes/{}", urlencoding::encode(node_id));
        let resp = self.client.http.request(Method::DELETE, &path, None).await?;
        self.client.expect_status(&resp, StatusCode::NO_CONTENT)
    }
}
