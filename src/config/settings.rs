//! Client settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the papertrade API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `PAPERTRADE_API_URL` and `PAPERTRADE_REQUEST_TIMEOUT_SECS`,
    /// falling back to development defaults when unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("PAPERTRADE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        Self {
            base_url: normalize_base_url(&base_url),
            request_timeout_secs: env::var("PAPERTRADE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Create configuration for an explicit base URL with default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = Config::new("http://localhost:5000/api/");
        assert_eq!(config.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_default_timeout() {
        let config = Config::new("http://example.test");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }
}
