//! Typed client for the Tatsu gamification API
//!
//! This crate wraps the Tatsu read API (`https://api.tatsu.gg/v1`) in a
//! small typed surface: user profile lookup, per-guild member ranking
//! lookup and paginated guild-wide rankings.
//!
//! # Features
//!
//! - **Bearer authentication**: the API key travels in the `Authorization`
//!   header on every request
//! - **Client-side rate limiting**: a 60-calls-per-minute gate shared
//!   across every endpoint of a client instance, with a configurable
//!   block-or-reject policy
//! - **Explicit missing-field defaults**: response records copy JSON keys
//!   field by field and default to `None` when a key is absent
//! - **Raw escape hatch**: [`TatsuClient::request`] exposes the low-level
//!   GET primitive for API paths this crate does not cover
//!
//! # Example
//!
//! ```rust,no_run
//! use tatsu_api_client::TatsuClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TatsuClient::new("my-api-key")?;
//!
//!     let profile = client.users().profile(274561812664549376).await?;
//!     println!("xp: {:?}", profile.xp);
//!
//!     let page = client.guilds().rankings(573885009820254239, 0).await?;
//!     if let Some(top) = page.rankings.first() {
//!         println!("top user: {:?}", top.user_id);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::TatsuClient;
pub use config::{ClientConfig, RateLimitPolicy};
pub use error::{ApiError, ApiResult};

// Re-export the gate types so callers can tune quotas without depending on
// tatsu-core directly.
pub use tatsu_core::rate_limit::{RateGateStatus, RateLimitConfig};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::TatsuClient;
    pub use crate::config::{ClientConfig, RateLimitPolicy};
    pub use crate::endpoints::guilds::{GuildRankings, GuildsApi, Ranking};
    pub use crate::endpoints::users::{UserProfile, UsersApi};
    pub use crate::error::{ApiError, ApiResult};
}
