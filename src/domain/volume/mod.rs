//! Volume resource — create, list, inspect, expand, delete.

pub mod client;
pub mod wire;

pub use wire::{
    Durability, GlusterMount, MountInfo, ReplicaDurability, VolumeCreateRequest,
    VolumeExpandRequest, VolumeInfoResponse, VolumeListResponse,
};
