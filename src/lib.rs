//! # Heketi client
//!
//! An async Rust client for the Heketi storage-orchestration REST API.
//!
//! ## Architecture
//!
//! The client is organized in layers:
//!
//! 1. **Auth** — per-request HS256 tokens bound to method + path
//! 2. **HTTP** — `HeketiHttp`, which signs every call and resolves
//!    `202 Accepted` operations by polling their queue location
//! 3. **Resources** — cluster, node, device and volume wire types plus
//!    thin sub-clients
//! 4. **High-Level Client** — `HeketiClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heketi::prelude::*;
//!
//! let client = HeketiClient::builder("http://heketi.local:8080")
//!     .user("admin")
//!     .key("My Secret")
//!     .build()?;
//!
//! let cluster = client.clusters().create().await?;
//! let volume = client
//!     .volumes()
//!     .create(&VolumeCreateRequest::new(10).with_durability(Durability::replicate(3)))
//!     .await?;
//! ```

// ── Layer 1: Auth ────────────────────────────────────────────────────────────

/// Request token signing.
pub mod auth;

/// Unified client error types.
pub mod error;

/// Default server URL and environment variable names.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request engine with accepted-operation resolution.
pub mod http;

// ── Layer 3: Resources ───────────────────────────────────────────────────────

/// Resource modules: wire types and sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `HeketiClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Resource wire types
    pub use crate::domain::cluster::{ClusterInfoResponse, ClusterListResponse};
    pub use crate::domain::device::{BrickInfo, DeviceAddRequest, DeviceInfoResponse, StorageSize};
    pub use crate::domain::node::{HostAddresses, NodeAddRequest, NodeInfoResponse};
    pub use crate::domain::volume::{
        Durability, VolumeCreateRequest, VolumeExpandRequest, VolumeInfoResponse,
        VolumeListResponse,
    };

    // Errors
    pub use crate::error::{AuthError, HeketiError, HeketiResult, HttpError};

    // Network
    pub use crate::network::DEFAULT_SERVER_URL;

    // Auth
    pub use crate::auth::{Claims, TokenSigner};

    // HTTP engine
    pub use crate::http::{FinalResponse, HeketiHttp, PollConfig};

    // Client + sub-clients
    pub use crate::client::{
        ClientConfig, ClustersClient, DevicesClient, HeketiClient, HeketiClientBuilder,
        NodesClient, VolumesClient,
    };
}
