//! Configuration for the Tatsu API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tatsu_core::rate_limit::RateLimitConfig;

/// Production API base URL
const DEFAULT_BASE_URL: &str = "https://api.tatsu.gg/v1";

/// What to do when the local call quota is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateLimitPolicy {
    /// Suspend the caller until the window resets, then proceed
    Block,
    /// Fail immediately with [`ApiError::RateLimitExceeded`]
    Reject,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::Block
    }
}

impl RateLimitPolicy {
    /// Parse from the `TATSU_RATE_LIMIT_POLICY` environment variable
    pub fn from_env() -> Self {
        match env::var("TATSU_RATE_LIMIT_POLICY")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "reject" | "fail" => Self::Reject,
            _ => Self::Block,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Bearer credential sent in the `Authorization` header
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate gate configuration (60 calls per minute by default)
    pub rate_limit: RateLimitConfig,
    /// What to do when the quota runs out
    pub rate_limit_policy: RateLimitPolicy,
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit: RateLimitConfig::default(),
            rate_limit_policy: RateLimitPolicy::default(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `TATSU_API_KEY`: bearer credential (required)
    /// - `TATSU_API_URL`: base URL (optional, defaults to production)
    /// - `TATSU_TIMEOUT_SECS`: request timeout in seconds (optional)
    /// - `TATSU_RATE_LIMIT_POLICY`: `block` or `reject` (optional)
    pub fn from_env() -> ApiResult<Self> {
        let api_key =
            env::var("TATSU_API_KEY").map_err(|_| ApiError::missing_env("TATSU_API_KEY"))?;

        let base_url =
            env::var("TATSU_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = env::var("TATSU_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            api_key,
            base_url,
            timeout,
            rate_limit: RateLimitConfig::default(),
            rate_limit_policy: RateLimitPolicy::from_env(),
        })
    }

    /// Builder-style method to set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the rate gate configuration
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: RateLimitConfig) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Builder-style method to set the quota-exhaustion policy
    #[must_use]
    pub fn with_rate_limit_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.rate_limit_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.api_key.is_empty() {
            return Err(ApiError::config("api_key cannot be empty"));
        }

        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(
                "base_url must start with http:// or https://",
            ));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("key");
        assert_eq!(config.base_url, "https://api.tatsu.gg/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit.max_calls, 60);
        assert_eq!(config.rate_limit_policy, RateLimitPolicy::Block);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("key")
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_rate_limit(RateLimitConfig::per_minute(10))
            .with_rate_limit_policy(RateLimitPolicy::Reject);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.rate_limit.max_calls, 10);
        assert_eq!(config.rate_limit_policy, RateLimitPolicy::Reject);
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new("key").validate().is_ok());

        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("key").with_base_url("").validate().is_err());
        assert!(
            ClientConfig::new("key")
                .with_base_url("ftp://api.tatsu.gg")
                .validate()
                .is_err()
        );
        assert!(
            ClientConfig::new("key")
                .with_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }
}
