//! Wire types for device requests and responses.

use serde::{Deserialize, Serialize};

/// `POST /devices` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceAddRequest {
    #[serde(rename = "node")]
    pub node_id: String,
    /// Block device path on the node, e.g. `/dev/sdb`.
    pub name: String,
}

impl DeviceAddRequest {
    pub fn new(node_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            name: name.into(),
        }
    }
}

/// Capacity figures reported for a device, in KiB.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageSize {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub free: u64,
    #[serde(default)]
    pub used: u64,
}

/// A brick carved out of a device.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrickInfo {
    pub id: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "device", default)]
    pub device_id: String,
    #[serde(rename = "node", default)]
    pub node_id: String,
    #[serde(default)]
    pub size: u64,
}

/// `GET /devices/{id}` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceInfoResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub storage: StorageSize,
    #[serde(default)]
    pub bricks: Vec<BrickInfo>,
}
