//! Low-level HTTP client — `HeketiHttp`.
//!
//! Signs every call, issues it, and resolves the server's "202 Accepted"
//! pattern down to a [`FinalResponse`]:
//!
//! 1. The initial call returns 202 with `Location: <queue uri>`.
//! 2. The queue uri is polled (redirects not followed) until it no longer
//!    carries `X-Pending`.
//! 3. A `303 See Other` names the result resource, which is fetched with a
//!    fresh GET (and may itself be accepted again). Any other status is the
//!    final response.
//!
//! Failure statuses (4xx/5xx) abort immediately; nothing is retried.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{redirect, Client, Method, StatusCode};
use serde_json::Value;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing;

use crate::auth::TokenSigner;
use crate::error::{AuthError, HttpError};
use crate::http::poll::PollConfig;
use crate::http::response::FinalResponse;

/// Header signalling that a queued operation is still running.
pub const X_PENDING: &str = "X-Pending";

const EMPTY_JSON_BODY: &str = "{}";

/// Outcome of polling a queued operation.
enum Resolution {
    /// The operation finished and this response is the result.
    Done(FinalResponse),
    /// The operation finished; the result lives at this location.
    SeeOther(String),
}

/// Low-level HTTP client for the Heketi REST API.
#[derive(Debug, Clone)]
pub struct HeketiHttp {
    base_url: String,
    client: Client,
    /// Same settings as `client`, but never follows redirects.
    poll_client: Client,
    default_headers: HeaderMap,
    signer: TokenSigner,
    poll: PollConfig,
}

impl HeketiHttp {
    pub fn new(
        base_url: &str,
        signer: TokenSigner,
        timeout: Duration,
        default_headers: HeaderMap,
        poll: PollConfig,
    ) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .default_headers(default_headers.clone())
            .build()?;
        let poll_client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .default_headers(default_headers.clone())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            poll_client,
            default_headers,
            signer,
            poll,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    // ── Public request entry points ──────────────────────────────────────

    /// Issue `method path` with an optional JSON body (`{}` when absent) and
    /// return the final response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<FinalResponse, HttpError> {
        self.execute(method, path, body, HeaderMap::new(), None)
            .await
    }

    /// Like [`request`](Self::request), with extra per-call headers. The
    /// signed `Authorization` header always wins over a caller-supplied one.
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<FinalResponse, HttpError> {
        self.execute(method, path, body, headers, None).await
    }

    /// Like [`request`](Self::request), aborting with
    /// [`HttpError::Cancelled`] as soon as `cancel` fires.
    pub async fn request_with_cancel(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        cancel: &CancellationToken,
    ) -> Result<FinalResponse, HttpError> {
        self.execute(method, path, body, HeaderMap::new(), Some(cancel))
            .await
    }

    // ── Resolution ───────────────────────────────────────────────────────

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
        cancel: Option<&CancellationToken>,
    ) -> Result<FinalResponse, HttpError> {
        let work = self.resolve(method, path, body, headers);
        match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(HttpError::Cancelled),
                    result = work => result,
                }
            }
            None => work.await,
        }
    }

    async fn resolve(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: HeaderMap,
    ) -> Result<FinalResponse, HttpError> {
        let mut method = method;
        let mut target = path.to_string();
        let mut payload = body
            .map(Value::to_string)
            .unwrap_or_else(|| EMPTY_JSON_BODY.to_string());
        let mut headers = headers;
        let mut hops = 0u32;
        // One poll deadline for the whole request, armed by the first 202.
        let mut deadline: Option<Instant> = None;

        loop {
            let response = self
                .send_signed(&self.client, method.clone(), &target, Some(payload), headers)
                .await?;

            if response.status != StatusCode::ACCEPTED {
                return Ok(response);
            }

            let location = response.location()?;
            tracing::debug!(%method, target = %target, location = %location, "Operation accepted");

            if deadline.is_none() {
                deadline = self.poll.timeout.map(|limit| Instant::now() + limit);
            }

            match self.wait_for(&location, deadline).await? {
                Resolution::Done(resp) => return Ok(resp),
                Resolution::SeeOther(next) => {
                    hops += 1;
                    if hops > self.poll.max_redirects {
                        return Err(HttpError::TooManyRedirects {
                            limit: self.poll.max_redirects,
                        });
                    }
                    tracing::debug!(hop = hops, location = %next, "Following operation result");
                    method = Method::GET;
                    target = next;
                    payload = EMPTY_JSON_BODY.to_string();
                    headers = HeaderMap::new();
                }
            }
        }
    }

    /// Poll `location` until done or until `deadline` passes.
    async fn wait_for(
        &self,
        location: &str,
        deadline: Option<Instant>,
    ) -> Result<Resolution, HttpError> {
        match (deadline, self.poll.timeout) {
            (Some(at), Some(limit)) => {
                tokio::time::timeout_at(at, self.poll_until_done(location))
                    .await
                    .map_err(|_| HttpError::PollTimeout(limit))?
            }
            _ => self.poll_until_done(location).await,
        }
    }

    async fn poll_until_done(&self, location: &str) -> Result<Resolution, HttpError> {
        let mut polls = 0u64;
        loop {
            polls += 1;
            let response = self
                .send_signed(&self.poll_client, Method::GET, location, None, HeaderMap::new())
                .await?;

            if response.headers.contains_key(X_PENDING) {
                tracing::debug!(
                    location = %location,
                    polls,
                    wait_ms = self.poll.interval.as_millis() as u64,
                    "Operation pending"
                );
                tokio::time::sleep(self.poll.interval).await;
                continue;
            }

            if response.status == StatusCode::SEE_OTHER {
                return Ok(Resolution::SeeOther(response.location()?));
            }

            return Ok(Resolution::Done(response));
        }
    }

    // ── Transport ────────────────────────────────────────────────────────

    async fn send_signed(
        &self,
        client: &Client,
        method: Method,
        target: &str,
        body: Option<String>,
        mut headers: HeaderMap,
    ) -> Result<FinalResponse, HttpError> {
        let (url, signed_target) = self.locate(target)?;

        let token = self.signer.sign(method.as_str(), &signed_target)?;
        let auth = HeaderValue::from_str(&token).map_err(|_| AuthError::InvalidHeader)?;
        headers.insert(AUTHORIZATION, auth);

        tracing::debug!(%method, target = %signed_target, "Sending request");

        // Caller and client-default content types take precedence.
        if body.is_some()
            && !headers.contains_key(CONTENT_TYPE)
            && !self.default_headers.contains_key(CONTENT_TYPE)
        {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut req = client.request(method, url).headers(headers);
        if let Some(b) = body {
            req = req.body(b);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        if status.is_client_error() || status.is_server_error() {
            return Err(HttpError::from_status(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(FinalResponse {
            status,
            headers,
            body,
        })
    }

    /// Resolve a path or absolute URL into the URL to call and the target
    /// string that gets signed.
    fn locate(&self, target: &str) -> Result<(String, String), HttpError> {
        if target.starts_with("http://") || target.starts_with("https://") {
            let url = reqwest::Url::parse(target)
                .map_err(|e| HttpError::InvalidUrl(format!("{}: {}", target, e)))?;
            let mut signed = url.path().to_string();
            if let Some(query) = url.query() {
                signed.push('?');
                signed.push_str(query);
            }
            return Ok((url.to_string(), signed));
        }

        let signed = if target.starts_with('/') {
            target.to_string()
        } else {
            format!("/{}", target)
        };
        Ok((format!("{}{}", self.base_url, signed), signed))
    }
}
