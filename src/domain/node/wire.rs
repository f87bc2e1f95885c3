//! Wire types for node requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::device::DeviceInfoResponse;

/// Management and storage host names of a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostAddresses {
    #[serde(default)]
    pub manage: Vec<String>,
    #[serde(default)]
    pub storage: Vec<String>,
}

/// `POST /nodes` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeAddRequest {
    pub zone: i32,
    pub hostnames: HostAddresses,
    #[serde(rename = "cluster")]
    pub cluster_id: String,
}

impl NodeAddRequest {
    /// A node reachable on `host` for both management and storage traffic.
    pub fn new(cluster_id: impl Into<String>, zone: i32, host: impl Into<String>) -> Self {
        let host = host.into();
        Self {
            zone,
            hostnames: HostAddresses {
                manage: vec![host.clone()],
                storage: vec![host],
            },
            cluster_id: cluster_id.into(),
        }
    }
}

/// `GET /nodes/{id}` and `POST /nodes` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeInfoResponse {
    pub id: String,
    #[serde(default)]
    pub zone: i32,
    #[serde(default)]
    pub hostnames: HostAddresses,
    #[serde(rename = "cluster", default)]
    pub cluster_id: String,
    #[serde(default)]
    pub devices: Vec<DeviceInfoResponse>,
}
