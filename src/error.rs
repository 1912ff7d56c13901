use reqwest::StatusCode;
use thiserror::Error;

/// Failure classification for a single API call.
///
/// Nothing here is retried internally; callers own the retry policy.
/// "No data" conditions (empty folder, empty page, absent array key) are
/// not errors and surface as `None`/empty results instead.
#[derive(Debug, Error)]
pub enum DiscogsError {
    /// Connection, timeout or DNS failure before a status line was read.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-2xx, non-429 response.
    #[error("http error: status {status}")]
    Http { status: StatusCode },

    /// 429 response. Rate-limit state is updated before this is raised.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// 2xx response whose body could not be parsed as JSON.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

impl DiscogsError {
    /// True for failures that a caller may reasonably retry after a pause.
    pub fn retriable(&self) -> bool {
        match self {
            DiscogsError::Transport(_) | DiscogsError::RateLimitExceeded => true,
            DiscogsError::Http { status } => status.is_server_error(),
            DiscogsError::MalformedResponse(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DiscogsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retriable_classification() {
        assert!(DiscogsError::RateLimitExceeded.retriable());
        assert!(DiscogsError::Http {
            status: StatusCode::BAD_GATEWAY
        }
        .retriable());
        assert!(!DiscogsError::Http {
            status: StatusCode::NOT_FOUND
        }
        .retriable());
    }
}
