use crate::config::Config;
use crate::error::{DiscogsError, Result};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Quota bookkeeping as advertised by the service in response headers.
/// Mutated only after a response has been received; diagnostics read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitState {
    pub total: i64,
    pub used: i64,
    pub remaining: i64,
    pub exceeded: bool,
    pub last_updated: Option<String>,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            total: 60,
            used: 0,
            remaining: 60,
            exceeded: false,
            last_updated: None,
        }
    }
}

/// Enforces a minimum spacing between the start of any two requests issued
/// through one client instance. The lock is held across the pacing sleep,
/// so `acquire` also serializes concurrent callers.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: tokio::sync::Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: tokio::sync::Mutex::new(None),
        }
    }

    /// Block until it is safe to issue the next request, then record the
    /// moment of issuance. This is a local pacing floor only; it does not
    /// consult the server-advertised quota.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("rate limiting: waiting {:?} before next request", wait);
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent).unwrap());
    // Authorization is attached per request; default headers carry no token.
    let builder = Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls();
    builder.build()
}

fn auth_header(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Discogs token={}", token)).expect("valid header")
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<std::result::Result<i64, ()>> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().parse::<i64>().map_err(|_| ()))
}

/// Refresh quota bookkeeping from the `X-Discogs-Ratelimit*` header family.
///
/// Missing headers fall back to the documented defaults (60/0/60); a header
/// that is present but non-numeric voids the whole update so a garbled
/// response cannot plant bogus numbers. A skipped update is logged and
/// leaves the prior state (including `last_updated`) intact.
pub fn update_rate_limit_from_headers(
    state: &mut RateLimitState,
    headers: &HeaderMap,
    status: StatusCode,
) {
    let total = header_i64(headers, "x-discogs-ratelimit");
    let used = header_i64(headers, "x-discogs-ratelimit-used");
    let remaining = header_i64(headers, "x-discogs-ratelimit-remaining");

    if [&total, &used, &remaining]
        .iter()
        .any(|h| matches!(h, Some(Err(_))))
    {
        warn!("failed to parse rate limit headers; keeping previous state");
        return;
    }
    if total.is_none() && used.is_none() && remaining.is_none() {
        debug!("no rate limit headers on response; keeping previous state");
        return;
    }

    state.total = total.and_then(|r| r.ok()).unwrap_or(60);
    state.used = used.and_then(|r| r.ok()).unwrap_or(0);
    state.remaining = remaining.and_then(|r| r.ok()).unwrap_or(60);
    state.exceeded = status == StatusCode::TOO_MANY_REQUESTS;
    state.last_updated = Some(chrono::Utc::now().to_rfc3339());
    debug!(
        "rate limit: {}/{} used, {} remaining",
        state.used, state.total, state.remaining
    );
}

/// Rate-limited request executor shared by every operation of one client
/// instance. Owns the pacing floor and the quota bookkeeping.
pub struct Transport {
    client: Client,
    cfg: Config,
    limiter: RateLimiter,
    state: Mutex<RateLimitState>,
}

impl Transport {
    pub fn new(cfg: Config) -> reqwest::Result<Self> {
        let client = build_client(&cfg)?;
        let limiter = RateLimiter::new(Duration::from_millis(cfg.min_request_interval_ms));
        Ok(Self {
            client,
            cfg,
            limiter,
            state: Mutex::new(RateLimitState::default()),
        })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Snapshot of the quota bookkeeping for diagnostics.
    pub fn rate_limit(&self) -> RateLimitState {
        self.state.lock().expect("rate limit state lock").clone()
    }

    /// Issue a single rate-limited authenticated GET and return the JSON
    /// body.
    ///
    /// Status classification: 2xx parses the body (unparseable body is
    /// fatal for the call), 429 marks the quota exhausted and fails, any
    /// other status fails with the status attached. No retry happens here;
    /// the caller owns retry policy.
    pub async fn get_json(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        self.limiter.acquire().await;

        let mut req = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth_header(&self.cfg.token));
        if !params.is_empty() {
            req = req.query(params);
        }
        let res = req.send().await.map_err(DiscogsError::Transport)?;

        let status = res.status();
        {
            let mut st = self.state.lock().expect("rate limit state lock");
            update_rate_limit_from_headers(&mut st, res.headers(), status);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let mut st = self.state.lock().expect("rate limit state lock");
            st.exceeded = true;
            st.remaining = 0;
            warn!("rate limit exceeded on GET {}", url);
            return Err(DiscogsError::RateLimitExceeded);
        }
        if !status.is_success() {
            debug!("GET {} failed with status {}", url, status);
            return Err(DiscogsError::Http { status });
        }
        res.json::<Value>()
            .await
            .map_err(DiscogsError::MalformedResponse)
    }
}
