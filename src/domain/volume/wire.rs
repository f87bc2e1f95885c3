//! Wire types for volume requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::device::BrickInfo;

/// Replica settings for replicated volumes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplicaDurability {
    #[serde(default)]
    pub replica: u32,
}

/// Volume durability. `kind` is `"none"` or `"replicate"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Durability {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicate: Option<ReplicaDurability>,
}

impl Durability {
    pub fn none() -> Self {
        Self {
            kind: "none".to_string(),
            replicate: None,
        }
    }

    pub fn replicate(replica: u32) -> Self {
        Self {
            kind: "replicate".to_string(),
            replicate: Some(ReplicaDurability { replica }),
        }
    }
}

/// `POST /volumes` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeCreateRequest {
    /// Size in GiB.
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restrict placement to these clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<Durability>,
}

impl VolumeCreateRequest {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_clusters(mut self, clusters: Vec<String>) -> Self {
        self.clusters = Some(clusters);
        self
    }

    pub fn with_durability(mut self, durability: Durability) -> Self {
        self.durability = Some(durability);
        self
    }
}

/// `POST /volumes/{id}/expand` body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeExpandRequest {
    /// Additional size in GiB.
    pub expand_size: u64,
}

/// Native GlusterFS mount information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlusterMount {
    #[serde(default)]
    pub device: String,
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MountInfo {
    #[serde(default)]
    pub glusterfs: GlusterMount,
}

/// `GET /volumes/{id}`, `POST /volumes` and expand response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VolumeInfoResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "cluster", default)]
    pub cluster_id: String,
    #[serde(default)]
    pub mount: MountInfo,
    #[serde(default)]
    pub bricks: Vec<BrickInfo>,
    #[serde(default)]
    pub durability: Durability,
}

/// `GET /volumes` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeListResponse {
    #[serde(default)]
    pub volumes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_omits_unset_fields() {
        let body = serde_json::to_value(VolumeCreateRequest::new(10)).unwrap();
        assert_eq!(body, serde_json::json!({ "size": 10 }));
    }

    #[test]
    fn test_create_request_with_replica() {
        let request = VolumeCreateRequest::new(100)
            .with_name("vol_db")
            .with_clusters(vec!["c1".into()])
            .with_durability(Durability::replicate(3));
        let body = serde_json::to_value(request).unwrap();

        assert_eq!(body["name"], "vol_db");
        assert_eq!(body["clusters"][0], "c1");
        assert_eq!(body["durability"]["type"], "replicate");
        assert_eq!(body["durability"]["replicate"]["replica"], 3);
    }

    #[test]
    fn test_volume_info_deserialize() {
        let json = r#"{
            "id": "v1",
            "name": "vol_v1",
            "size": 10,
            "cluster": "c1",
            "mount": {"glusterfs": {"device": "192.168.10.100:vol_v1", "options": {"backupvolfile-servers": "192.168.10.101"}}},
            "bricks": [{"id": "b1", "path": "/var/lib/heketi/b1", "device": "d1", "node": "n1", "size": 5242880}],
            "durability": {"type": "replicate", "replicate": {"replica": 2}}
        }"#;
        let info: VolumeInfoResponse = serde_json::from_str(json).unwrap();

        assert_eq!(info.cluster_id, "c1");
        assert_eq!(info.mount.glusterfs.device, "192.168.10.100:vol_v1");
        assert_eq!(info.bricks[0].device_id, "d1");
        assert_eq!(info.durability, Durability::replicate(2));
    }
}
