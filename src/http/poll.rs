//! Settings for resolving accepted (202) operations.

use std::time::Duration;

/// Default wait between polls of a pending operation.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default bound on result redirects (303) followed for one request.
pub const DEFAULT_MAX_REDIRECTS: u32 = 8;

/// How the engine waits on a server-side operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    /// Wait between two polls while the server reports `X-Pending`.
    pub interval: Duration,
    /// Upper bound on the polling of one request, counted from its first
    /// 202 and shared by all later hops. `None` polls until the server
    /// finishes or the caller cancels.
    pub timeout: Option<Duration>,
    /// Maximum number of `303 See Other` hops before giving up.
    pub max_redirects: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl PollConfig {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}
