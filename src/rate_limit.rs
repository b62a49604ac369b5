//! Login rate limiting.
//!
//! Fixed-window counting per client identifier: the window is anchored at the
//! first attempt it contains and is never slid forward by later attempts.
//! State lives in memory for the life of the process; a restart clears all
//! attempt history.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use log::{debug, warn};
use serde::Serialize;

/// Attempts allowed inside one window.
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;

/// Window duration: 15 minutes.
pub const ATTEMPT_WINDOW_MS: i64 = 15 * 60 * 1000;

#[derive(Debug, Clone)]
struct AttemptRecord {
    count: u32,
    window_start_ms: i64,
}

/// What the caller may do with the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub remaining_attempts: u32,
    /// When the closed window reopens. Set only on blocked attempts.
    pub reset_at_ms: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct LoginRateLimiter {
    attempts: Arc<DashMap<String, AttemptRecord>>,
    max_attempts: u32,
    window_ms: i64,
}

impl Default for LoginRateLimiter {
    fn default() -> Self {
        Self::new(MAX_LOGIN_ATTEMPTS, Duration::milliseconds(ATTEMPT_WINDOW_MS))
    }
}

impl LoginRateLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            attempts: Arc::new(DashMap::new()),
            max_attempts,
            window_ms: window.num_milliseconds(),
        }
    }

    /// Check, and if allowed consume, one attempt for `identifier`.
    pub fn check(&self, identifier: &str) -> RateLimitDecision {
        self.check_at(identifier, Utc::now().timestamp_millis())
    }

    /// Check one attempt against an explicit clock reading.
    ///
    /// The map entry stays locked for the whole read-check-update, so two
    /// racing attempts cannot both observe the last free slot.
    pub fn check_at(&self, identifier: &str, now_ms: i64) -> RateLimitDecision {
        let mut record = self.attempts.entry(identifier.to_string()).or_insert(AttemptRecord {
            count: 0,
            window_start_ms: now_ms,
        });

        // A fully elapsed window starts over, anchored at this attempt.
        if now_ms - record.window_start_ms > self.window_ms {
            record.count = 0;
            record.window_start_ms = now_ms;
        }

        if record.count >= self.max_attempts {
            warn!("client {identifier} exhausted {} login attempts", self.max_attempts);
            return RateLimitDecision {
                allowed: false,
                remaining_attempts: 0,
                reset_at_ms: Some(record.window_start_ms + self.window_ms),
            };
        }

        record.count += 1;
        RateLimitDecision {
            allowed: true,
            remaining_attempts: self.max_attempts - record.count,
            reset_at_ms: None,
        }
    }

    /// Forget everything about `identifier`. Called after a successful login.
    pub fn reset(&self, identifier: &str) {
        if self.attempts.remove(identifier).is_some() {
            debug!("cleared login attempts for client {identifier}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn test_attempts_count_down_then_block() {
        let limiter = LoginRateLimiter::default();

        for expected_remaining in [4, 3, 2, 1, 0] {
            let decision = limiter.check_at("x", NOW);
            assert!(decision.allowed);
            assert_eq!(decision.remaining_attempts, expected_remaining);
            assert_eq!(decision.reset_at_ms, None);
        }

        let decision = limiter.check_at("x", NOW);
        assert!(!decision.allowed);
        assert_eq!(decision.remaining_attempts, 0);
        assert_eq!(decision.reset_at_ms, Some(NOW + ATTEMPT_WINDOW_MS));
    }

    #[test]
    fn test_window_is_anchored_at_first_attempt() {
        let limiter = LoginRateLimiter::default();

        // Attempts spread through the window must not push the anchor.
        limiter.check_at("x", NOW);
        for i in 1..5 {
            limiter.check_at("x", NOW + i * 60_000);
        }

        let decision = limiter.check_at("x", NOW + 5 * 60_000);
        assert!(!decision.allowed);
        assert_eq!(decision.reset_at_ms, Some(NOW + ATTEMPT_WINDOW_MS));
    }

    #[test]
    fn test_elapsed_window_reopens() {
        let limiter = LoginRateLimiter::default();

        for _ in 0..6 {
            limiter.check_at("x", NOW);
        }

        let decision = limiter.check_at("x", NOW + ATTEMPT_WINDOW_MS + 1);
        assert!(decision.allowed);
        assert_eq!(decision.remaining_attempts, 4);
    }

    #[test]
    fn test_blocked_attempts_do_not_extend_the_window() {
        let limiter = LoginRateLimiter::default();

        for _ in 0..5 {
            limiter.check_at("x", NOW);
        }
        // Hammering while blocked changes nothing.
        for i in 0..10 {
            assert!(!limiter.check_at("x", NOW + i).allowed);
        }

        assert!(limiter.check_at("x", NOW + ATTEMPT_WINDOW_MS + 1).allowed);
    }

    #[test]
    fn test_reset_clears_history() {
        let limiter = LoginRateLimiter::default();

        for _ in 0..6 {
            limiter.check_at("x", NOW);
        }
        limiter.reset("x");

        let decision = limiter.check_at("x", NOW);
        assert!(decision.allowed);
        assert_eq!(decision.remaining_attempts, 4);
    }

    #[test]
    fn test_identifiers_are_independent() {
        let limiter = LoginRateLimiter::default();

        for _ in 0..6 {
            limiter.check_at("x", NOW);
        }

        let decision = limiter.check_at("y", NOW);
        assert!(decision.allowed);
        assert_eq!(decision.remaining_attempts, 4);
    }

    #[test]
    fn test_custom_bounds() {
        let limiter = LoginRateLimiter::new(2, Duration::minutes(1));

        assert!(limiter.check_at("x", NOW).allowed);
        assert!(limiter.check_at("x", NOW).allowed);
        assert!(!limiter.check_at("x", NOW).allowed);
        assert!(limiter.check_at("x", NOW + 60_001).allowed);
    }
}
