//! High-level client — `HeketiClient` with nested sub-client accessors.
//!
//! Each resource has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the status-check policy and the accessors.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing;

use crate::auth::TokenSigner;
use crate::domain::cluster::client::Clusters;
use crate::domain::device::client::Devices;
use crate::domain::node::client::Nodes;
use crate::domain::volume::client::Volumes;
use crate::error::{HeketiError, HeketiResult};
use crate::http::{FinalResponse, HeketiHttp, PollConfig};
use crate::network::{DEFAULT_SERVER_URL, ENV_KEY, ENV_SERVER, ENV_USER};

// Re-export sub-client types for convenience.
pub use crate::domain::cluster::client::Clusters as ClustersClient;
pub use crate::domain::device::client::Devices as DevicesClient;
pub use crate::domain::node::client::Nodes as NodesClient;
pub use crate::domain::volume::client::Volumes as VolumesClient;

/// Default per-call HTTP timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings. Immutable once the client is built.
#[derive(Clone)]
pub struct ClientConfig {
    pub host: String,
    pub user: String,
    key: Vec<u8>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, user: impl Into<String>, key: impl AsRef<[u8]>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            user: user.into(),
            key: key.as_ref().to_vec(),
        }
    }

    /// Read `HEKETI_CLI_SERVER`, `HEKETI_CLI_USER` and `HEKETI_CLI_KEY`.
    pub fn from_env() -> HeketiResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HeketiResult<Self> {
        let host = lookup(ENV_SERVER)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let user = lookup(ENV_USER)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| HeketiError::Config(format!("{} is not set", ENV_USER)))?;
        let key = lookup(ENV_KEY)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| HeketiError::Config(format!("{} is not set", ENV_KEY)))?;
        Ok(Self::new(host, user, key))
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

/// The primary entry point for the Heketi client.
///
/// Provides nested sub-client accessors for each resource:
/// `client.clusters()`, `client.volumes()`, etc.
///
/// Resource calls are cancelled by dropping their future, e.g. under
/// `tokio::time::timeout` or a losing `tokio::select!` branch; polling
/// stops with it. [`HeketiHttp::request_with_cancel`] takes a
/// `CancellationToken` for raw requests.
#[derive(Debug, Clone)]
pub struct HeketiClient {
    pub(crate) http: HeketiHttp,
    config: ClientConfig,
    /// Raise on a success status other than the expected one instead of
    /// returning an empty result.
    strict_status: bool,
}

impl HeketiClient {
    pub fn builder(host: impl Into<String>) -> HeketiClientBuilder {
        HeketiClientBuilder::new(host)
    }

    /// Build a client with default settings from the `HEKETI_CLI_*`
    /// environment variables.
    pub fn from_env() -> HeketiResult<Self> {
        HeketiClientBuilder::from_config(ClientConfig::from_env()?).build()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying request engine, for calls outside the resource map.
    pub fn http(&self) -> &HeketiHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn clusters(&self) -> Clusters<'_> {
        Clusters { client: self }
    }

    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { client: self }
    }

    pub fn devices(&self) -> Devices<'_> {
        Devices { client: self }
    }

    pub fn volumes(&self) -> Volumes<'_> {
        Volumes { client: self }
    }

    /// Liveness check: `GET /hello` answered with 200.
    pub async fn hello(&self) -> HeketiResult<bool> {
        let resp = self.http.request(Method::GET, "/hello", None).await?;
        self.expect_status(&resp, StatusCode::OK)
    }

    // ── Status-check policy ──────────────────────────────────────────────

    /// Parse the body when the status matches `expected`.
    pub(crate) fn expect_json<T: DeserializeOwned>(
        &self,
        resp: &FinalResponse,
        expected: StatusCode,
    ) -> HeketiResult<Option<T>> {
        if self.expect_status(resp, expected)? {
            Ok(Some(resp.json()?))
        } else {
            Ok(None)
        }
    }

    /// Whether the status matches `expected`. A mismatch is `Ok(false)`
    /// unless strict status checking is on.
    pub(crate) fn expect_status(
        &self,
        resp: &FinalResponse,
        expected: StatusCode,
    ) -> HeketiResult<bool> {
        if resp.status == expected {
            return Ok(true);
        }
        if self.strict_status {
            return Err(HeketiError::UnexpectedStatus {
                expected: expected.as_u16(),
                actual: resp.status_code(),
            });
        }
        tracing::warn!(
            expected = expected.as_u16(),
            actual = resp.status_code(),
            "Unexpected success status, returning empty result"
        );
        Ok(false)
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct HeketiClientBuilder {
    host: String,
    user: String,
    key: Vec<u8>,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    poll: PollConfig,
    strict_status: bool,
}

impl HeketiClientBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: String::new(),
            key: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
            poll: PollConfig::default(),
            strict_status: false,
        }
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::new(config.host).user(config.user).key(config.key)
    }

    /// Token issuer.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Shared signing key.
    pub fn key(mut self, key: impl AsRef<[u8]>) -> Self {
        self.key = key.as_ref().to_vec();
        self
    }

    /// Per-call HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Wait between polls of a pending operation.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll.interval = interval;
        self
    }

    /// Bound the total time a request spends polling, across every
    /// accepted operation and `303` hop it goes through.
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll.timeout = Some(timeout);
        self
    }

    /// Maximum `303 See Other` hops per request.
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.poll.max_redirects = max_redirects;
        self
    }

    /// Turn status mismatches into [`HeketiError::UnexpectedStatus`].
    pub fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = strict;
        self
    }

    pub fn build(self) -> HeketiResult<HeketiClient> {
        let config = ClientConfig::new(self.host, self.user, self.key);
        reqwest::Url::parse(&config.host)
            .map_err(|e| HeketiError::Config(format!("Invalid host '{}': {}", config.host, e)))?;

        let signer = TokenSigner::new(config.user.clone(), &config.key)?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                HeketiError::Config(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(&value).map_err(|e| {
                HeketiError::Config(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http = HeketiHttp::new(&config.host, signer, self.timeout, headers, self.poll)?;

        Ok(HeketiClient {
            http,
            config,
            strict_status: self.strict_status,
        })
    }
}
