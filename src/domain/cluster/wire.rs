//! Wire types for cluster requests and responses.

use serde::{Deserialize, Serialize};

/// `GET /clusters/{id}` and `POST /clusters` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterInfoResponse {
    pub id: String,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub volumes: Vec<String>,
}

/// `GET /clusters` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterListResponse {
    #[serde(default)]
    pub clusters: Vec<String>,
}
