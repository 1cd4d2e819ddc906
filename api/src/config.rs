//! Client configuration.
//!
//! Values come from the application (or the environment via
//! [`ApiConfig::from_env`]); nothing about the backend location is hardcoded.

use crate::error::ApiError;
use std::time::Duration;

/// Environment variable holding the backend base URL
pub const BASE_URL_VAR: &str = "ADMIN_API_BASE_URL";

/// Environment variable holding the bearer token
pub const TOKEN_VAR: &str = "ADMIN_API_TOKEN";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_VAR: &str = "ADMIN_API_TIMEOUT_SECS";

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g. "https://admin.example.com").
    ///
    /// Request paths such as `/api/dashboard` are appended to it.
    pub base_url: String,

    /// Bearer token sent in the `Authorization` header.
    pub access_token: Option<String>,

    /// Per-request timeout.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration for the given base URL.
    #[must_use]
    pub const fn new(base_url: String) -> Self {
        Self {
            base_url,
            access_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the bearer token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from `ADMIN_API_BASE_URL`, `ADMIN_API_TOKEN` and
    /// `ADMIN_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if the base URL is missing or the
    /// timeout is not a positive whole number of seconds.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ApiError::InvalidConfig(format!("{BASE_URL_VAR} is not set")))?;

        let mut config = Self::new(base_url);

        if let Some(token) = lookup(TOKEN_VAR).filter(|token| !token.is_empty()) {
            config = config.with_access_token(token);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ApiError::InvalidConfig(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got {raw:?}"
                    ))
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000".to_string())
    }
}
