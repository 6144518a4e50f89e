//! Shared infrastructure for the Tatsu API client
//!
//! This crate holds the pieces of the client that are not tied to any
//! particular endpoint:
//!
//! - **Rate limiting**: a fixed-window call gate bounding aggregate
//!   request throughput per client instance
//!
//! # Example
//!
//! ```rust
//! use tatsu_core::rate_limit::{RateGate, RateLimitConfig};
//!
//! let gate = RateGate::new(RateLimitConfig::default());
//!
//! if gate.try_acquire() {
//!     // Proceed with the API call
//! } else {
//!     // Quota exhausted, wait for the window to reset or reject
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod rate_limit;

pub use rate_limit::{RateGate, RateGateStatus, RateLimitConfig};
