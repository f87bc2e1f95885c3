//! Node resource — add, inspect, delete.

pub mod client;
pub mod wire;

pub use wire::{HostAddresses, NodeAddRequest, NodeInfoResponse};
