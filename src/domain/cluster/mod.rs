//! Cluster resource — create, inspect, list, delete.

pub mod client;
pub mod wire;

pub use wire::{ClusterInfoResponse, ClusterListResponse};
