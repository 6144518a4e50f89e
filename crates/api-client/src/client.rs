//! Main API client implementation

use crate::config::{ClientConfig, RateLimitPolicy};
use crate::endpoints::{GuildsApi, UsersApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tatsu_core::rate_limit::{RateGate, RateGateStatus};
use tracing::{debug, instrument, warn};

/// Tatsu API client
///
/// This client wraps `reqwest` and adds:
/// - Bearer authentication via the `Authorization` header
/// - A client-side rate gate (60 calls per 60-second window, shared across
///   every endpoint of an instance)
/// - Typed endpoint accessors for the read API
///
/// Cloning the client is cheap and clones share the rate-limit quota.
#[derive(Clone)]
pub struct TatsuClient {
    inner: Client,
    config: Arc<ClientConfig>,
    gate: RateGate,
}

impl TatsuClient {
    /// Create a new client for the production API with the given key
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with configuration from environment variables
    pub fn from_env() -> ApiResult<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static("tatsu-api-client/0.1"),
        );

        let mut auth = HeaderValue::from_str(&config.api_key)
            .map_err(|_| ApiError::config("api_key contains invalid header characters"))?;
        auth.set_sensitive(true);
        default_headers.insert(AUTHORIZATION, auth);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Transport)?;

        let gate = RateGate::new(config.rate_limit.clone());

        Ok(Self {
            inner,
            config: Arc::new(config),
            gate,
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Snapshot of the rate gate (remaining quota and reset time)
    #[must_use]
    pub fn rate_limit_status(&self) -> RateGateStatus {
        self.gate.status()
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access user endpoints
    #[must_use]
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access guild ranking endpoints
    #[must_use]
    pub fn guilds(&self) -> GuildsApi {
        GuildsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level request primitive
    // -------------------------------------------------------------------------

    /// Perform an authenticated GET and return the raw JSON body
    ///
    /// `path` is joined onto the base URL. This is the primitive behind the
    /// typed endpoints and is exposed for API paths this crate does not
    /// cover. One unit of rate-limit quota is consumed before the request
    /// is sent, so a failed call still counts against the window.
    ///
    /// # Errors
    ///
    /// [`ApiError::Status`] for a non-2xx response, [`ApiError::Transport`]
    /// for connection or timeout failures, [`ApiError::Json`] when a
    /// success body fails to parse, and
    /// [`ApiError::RateLimitExceeded`] when the quota is exhausted under
    /// [`RateLimitPolicy::Reject`]. Under [`RateLimitPolicy::Block`] the
    /// call suspends until quota is available instead.
    #[instrument(skip(self))]
    pub async fn request(&self, path: &str) -> ApiResult<Value> {
        self.acquire_gate().await?;

        let url = join_url(&self.config.base_url, path);
        debug!(url = %url, "issuing GET request");

        let response = self.inner.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Consume one unit of quota, honoring the configured policy
    async fn acquire_gate(&self) -> ApiResult<()> {
        match self.config.rate_limit_policy {
            RateLimitPolicy::Reject => {
                if self.gate.try_acquire() {
                    Ok(())
                } else {
                    warn!("call quota exhausted, rejecting request");
                    Err(ApiError::RateLimitExceeded)
                }
            }
            RateLimitPolicy::Block => loop {
                if self.gate.try_acquire() {
                    return Ok(());
                }
                // Sleep a minimum tick so a zero reset estimate cannot spin
                let wait = self.gate.time_until_reset().max(Duration::from_millis(1));
                debug!(
                    wait_ms = wait.as_millis() as u64,
                    "call quota exhausted, waiting for window reset"
                );
                tokio::time::sleep(wait).await;
            },
        }
    }

    /// Turn a response into JSON or a status error
    ///
    /// A success body that fails to parse is a decode failure
    /// ([`ApiError::Json`]), not a transport failure: the response was
    /// obtained.
    async fn handle_response(&self, response: Response) -> ApiResult<Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!(status = status.as_u16(), "API returned an error status");
            Err(ApiError::status(status.as_u16(), message))
        }
    }
}

/// Join a path fragment onto the base URL without doubling slashes
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
