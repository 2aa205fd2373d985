use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
/// Request timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const ENV_BASE_URL: &str = "QFIN_API_URL";
/// Environment variable overriding [`ApiConfig::timeout_ms`].
pub const ENV_TIMEOUT_MS: &str = "QFIN_API_TIMEOUT_MS";

/// Connection settings for the finance backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without trailing slash.
    pub base_url: String,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ApiConfig {
    /// Build a config for `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let config = Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        config.validated()
    }

    /// Read overrides from `QFIN_API_URL` and `QFIN_API_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ApiConfig::from_env`], with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{ENV_TIMEOUT_MS} must be a whole number of milliseconds, got '{raw}'"))
            })?;
        }

        config.validated()
    }

    /// Trim trailing slashes and reject unusable values.
    fn validated(mut self) -> Result<Self, CoreError> {
        let trimmed = self.base_url.trim().trim_end_matches('/').to_string();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "base URL '{}' must start with http:// or https://",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(CoreError::Config("timeout must be greater than zero".into()));
        }
        self.base_url = trimmed;
        Ok(self)
    }

    /// Full URL for an endpoint path starting with `/`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
