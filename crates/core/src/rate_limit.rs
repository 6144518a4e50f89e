//! Rate limiting for outbound API calls
//!
//! Provides a fixed-window call gate: at most `max_calls` acquisitions per
//! `window`, after which the gate denies callers until the window elapses.
//! The gate is a single shared counter — it bounds aggregate throughput
//! across every endpoint of a client instance, not per-endpoint usage.
//!
//! # Example
//!
//! ```rust
//! use tatsu_core::rate_limit::{RateGate, RateLimitConfig};
//! use std::time::Duration;
//!
//! let gate = RateGate::new(RateLimitConfig::new(60, Duration::from_secs(60)));
//!
//! if gate.try_acquire() {
//!     // Proceed with the API call
//! } else {
//!     // Quota exhausted; `gate.time_until_reset()` says how long to wait
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Rate gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum calls per window
    pub max_calls: u32,
    /// Time window duration
    pub window: Duration,
}

impl Default for RateLimitConfig {
    /// The Tatsu API allows 60 calls per 60-second window.
    fn default() -> Self {
        Self {
            max_calls: 60,
            window: Duration::from_secs(60),
        }
    }
}

impl RateLimitConfig {
    /// Create a configuration with an explicit quota and window
    #[must_use]
    pub fn new(max_calls: u32, window: Duration) -> Self {
        Self { max_calls, window }
    }

    /// Per-minute quota
    #[must_use]
    pub fn per_minute(max_calls: u32) -> Self {
        Self {
            max_calls,
            window: Duration::from_secs(60),
        }
    }
}

/// Mutable window state behind the gate's mutex
#[derive(Debug)]
struct Window {
    calls: u32,
    started: Instant,
}

/// Fixed-window call gate
///
/// A single mutex-guarded counter plus the instant the current window
/// opened. Acquisitions within a window count against the quota; once the
/// window elapses the counter resets and a new window opens on the next
/// acquisition. Cloning the gate shares the underlying state, so every
/// handle draws from the same quota.
#[derive(Debug, Clone)]
pub struct RateGate {
    window: Arc<Mutex<Window>>,
    config: RateLimitConfig,
}

impl RateGate {
    /// Create a new gate with a full quota
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            window: Arc::new(Mutex::new(Window {
                calls: 0,
                started: Instant::now(),
            })),
            config,
        }
    }

    /// Try to consume one unit of quota
    ///
    /// Returns `true` if the call may proceed. The unit is consumed
    /// regardless of what the caller does next.
    #[must_use]
    pub fn try_acquire(&self) -> bool {
        // Recover a poisoned lock; the counter stays valid after a panic
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        self.roll(&mut window);

        if window.calls < self.config.max_calls {
            window.calls += 1;
            true
        } else {
            false
        }
    }

    /// Remaining quota in the current window
    #[must_use]
    pub fn remaining(&self) -> u32 {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        self.roll(&mut window);
        self.config.max_calls.saturating_sub(window.calls)
    }

    /// Time until the current window elapses and the quota resets
    ///
    /// Returns `Duration::ZERO` when quota is available right now.
    #[must_use]
    pub fn time_until_reset(&self) -> Duration {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        self.roll(&mut window);

        if window.calls < self.config.max_calls {
            return Duration::ZERO;
        }
        self.config
            .window
            .saturating_sub(window.started.elapsed())
    }

    /// Drop the current window and restore the full quota
    pub fn reset(&self) {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        window.calls = 0;
        window.started = Instant::now();
    }

    /// Snapshot of the gate state
    #[must_use]
    pub fn status(&self) -> RateGateStatus {
        let mut window = self.window.lock().unwrap_or_else(|e| e.into_inner());
        self.roll(&mut window);

        RateGateStatus {
            remaining: self.config.max_calls.saturating_sub(window.calls),
            max_calls: self.config.max_calls,
            reset_in: if window.calls < self.config.max_calls {
                Duration::ZERO
            } else {
                self.config.window.saturating_sub(window.started.elapsed())
            },
        }
    }

    /// The configuration this gate was built with
    #[must_use]
    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Open a fresh window if the current one has elapsed
    fn roll(&self, window: &mut Window) {
        if window.started.elapsed() >= self.config.window {
            window.calls = 0;
            window.started = Instant::now();
        }
    }
}

/// Point-in-time view of a gate
#[derive(Debug, Clone, Serialize)]
pub struct RateGateStatus {
    /// Calls still available in the current window
    pub remaining: u32,
    /// Window quota
    pub max_calls: u32,
    /// Time until the quota resets (zero when quota is available)
    pub reset_in: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_gate_basic() {
        let gate = RateGate::new(RateLimitConfig::new(3, Duration::from_secs(60)));

        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
        assert!(gate.try_acquire());
        assert!(!gate.try_acquire()); // Quota exhausted
    }

    #[test]
    fn test_gate_default_config() {
        let config = RateLimitConfig::default();
        assert_eq!(config.max_calls, 60);
        assert_eq!(config.window, Duration::from_secs(60));
    }

    #[test]
    fn test_gate_remaining() {
        let gate = RateGate::new(RateLimitConfig::new(2, Duration::from_secs(60)));

        assert_eq!(gate.remaining(), 2);
        assert!(gate.try_acquire());
        assert_eq!(gate.remaining(), 1);
        assert!(gate.try_acquire());
        assert_eq!(gate.remaining(), 0);
    }

    #[test]
    fn test_gate_reset() {
        let gate = RateGate::new(RateLimitConfig::new(1, Duration::from_secs(60)));

        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());

        gate.reset();
        assert!(gate.try_acquire());
    }

    #[test]
    fn test_gate_window_elapses() {
        let gate = RateGate::new(RateLimitConfig::new(1, Duration::from_millis(30)));

        assert!(gate.try_acquire());
        assert!(!gate.try_acquire());

        thread::sleep(Duration::from_millis(40));
        assert!(gate.try_acquire()); // Fresh window, fresh quota
    }

    #[test]
    fn test_gate_time_until_reset() {
        let gate = RateGate::new(RateLimitConfig::new(1, Duration::from_secs(60)));

        assert_eq!(gate.time_until_reset(), Duration::ZERO);
        assert!(gate.try_acquire());

        let wait = gate.time_until_reset();
        assert!(wait > Duration::ZERO);
        assert!(wait <= Duration::from_secs(60));
    }

    #[test]
    fn test_gate_shared_between_clones() {
        let gate = RateGate::new(RateLimitConfig::new(2, Duration::from_secs(60)));
        let other = gate.clone();

        assert!(gate.try_acquire());
        assert!(other.try_acquire());
        assert!(!gate.try_acquire()); // Clones draw from the same quota
    }

    #[test]
    fn test_gate_status() {
        let gate = RateGate::new(RateLimitConfig::new(10, Duration::from_secs(60)));
        assert!(gate.try_acquire());

        let status = gate.status();
        assert_eq!(status.max_calls, 10);
        assert_eq!(status.remaining, 9);
        assert_eq!(status.reset_in, Duration::ZERO);
    }
}
