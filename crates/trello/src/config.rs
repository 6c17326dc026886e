//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::{Result, TrelloError};

/// Public Trello REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Default timeout for API requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credentials and endpoint settings for [`crate::TrelloClient`].
#[derive(Clone)]
pub struct TrelloConfig {
    /// Application API key, sent as the `key` query parameter.
    pub api_key: String,
    /// Member token, sent as the `token` query parameter.
    pub token: String,
    /// API root without trailing slash.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl TrelloConfig {
    /// Create a configuration for the public API with default timeout.
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Point the client at a different API root (proxies, test servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from `TRELLO_*` environment variables.
    ///
    /// # Errors
    /// Returns [`TrelloError::Config`] listing every missing variable.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut missing = Vec::new();

        let api_key = match lookup("TRELLO_API_KEY") {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => {
                missing.push("TRELLO_API_KEY");
                String::new()
            }
        };

        let token = match lookup("TRELLO_TOKEN") {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            _ => {
                missing.push("TRELLO_TOKEN");
                String::new()
            }
        };

        if !missing.is_empty() {
            return Err(TrelloError::Config(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        let base_url = lookup("TRELLO_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup("TRELLO_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                TrelloError::Config(format!("TRELLO_TIMEOUT_SECS is not a number: {raw}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(TrelloError::Config(
                "TRELLO_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Self::new(api_key, token)
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }
}
