//! Device resource — add, inspect, delete.

pub mod client;
pub mod wire;

pub use wire::{BrickInfo, DeviceAddRequest, DeviceInfoResponse, StorageSize};
