use std::env;

/// Runtime configuration for the Discogs API client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub min_request_interval_ms: u64,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - DISCOGS_TOKEN [required]
    /// - DISCOGS_API_URL (default: https://api.discogs.com)
    /// - DISCOGS_USER_AGENT (default: discogs-client/<version>)
    /// - DISCOGS_HTTP_TIMEOUT_SECS (default: 30)
    /// - DISCOGS_MIN_REQUEST_INTERVAL_MS (default: 1000)
    pub fn from_env() -> Result<Self, String> {
        let token = env::var("DISCOGS_TOKEN").map_err(|_| "Missing DISCOGS_TOKEN".to_string())?;
        Ok(Self::with_token(token))
    }

    /// Build a configuration with an explicit token; the remaining values
    /// still honor the environment overrides.
    pub fn with_token(token: String) -> Self {
        let api_url = env::var("DISCOGS_API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "https://api.discogs.com".to_string());
        let timeout_secs = env::var("DISCOGS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let min_request_interval_ms = env::var("DISCOGS_MIN_REQUEST_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(1000);
        let default_ua = format!(
            "discogs-client/{} (+https://github.com/HautechAI/discogs-client)",
            env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".into())
        );
        let user_agent = env::var("DISCOGS_USER_AGENT").unwrap_or(default_ua);

        Self {
            token,
            api_url,
            user_agent,
            timeout_secs,
            min_request_interval_ms,
        }
    }
}
