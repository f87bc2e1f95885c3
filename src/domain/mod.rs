//! Resource modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `wire.rs` — serde structs matching the server's request/response JSON
//! - `client.rs` — sub-client mapping each operation to method, path and
//!   expected success status

pub mod cluster;
pub mod device;
pub mod node;
pub mod volume;
