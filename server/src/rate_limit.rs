//! In-memory rate limiting for unauthenticated write endpoints.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<String, VecDeque<Instant>>`.
//! Each limiter enforces two windows:
//! - Per-key: requests per email address (default 3/hour for registration)
//! - Global: requests across all keys, to cap outbound mail volume
//!
//! Registration and login-code requests get separate limiters so one flow
//! cannot starve the other.
//!
//! TRADE-OFFS
//! ==========
//! State is process-local and lost on restart. That is acceptable for a
//! single-instance deployment where the limit only guards mail quota.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::env_parse;

const DEFAULT_REGISTRATION_LIMIT: usize = 3;
const DEFAULT_REGISTRATION_WINDOW_SECS: u64 = 3600;
const DEFAULT_REGISTRATION_GLOBAL_LIMIT: usize = 60;

const DEFAULT_LOGIN_CODE_LIMIT: usize = 5;
const DEFAULT_LOGIN_CODE_WINDOW_SECS: u64 = 900;
const DEFAULT_LOGIN_CODE_GLOBAL_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_key_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
}

impl RateLimitConfig {
    /// `REGISTRATION_RATE_LIMIT`, `REGISTRATION_RATE_WINDOW_SECS`, `REGISTRATION_RATE_GLOBAL`.
    #[must_use]
    pub fn registration_from_env() -> Self {
        Self {
            per_key_limit: env_parse("REGISTRATION_RATE_LIMIT", DEFAULT_REGISTRATION_LIMIT),
            global_limit: env_parse("REGISTRATION_RATE_GLOBAL", DEFAULT_REGISTRATION_GLOBAL_LIMIT),
            window: Duration::from_secs(env_parse("REGISTRATION_RATE_WINDOW_SECS", DEFAULT_REGISTRATION_WINDOW_SECS)),
        }
    }

    /// `LOGIN_CODE_RATE_LIMIT`, `LOGIN_CODE_RATE_WINDOW_SECS`, `LOGIN_CODE_RATE_GLOBAL`.
    #[must_use]
    pub fn login_codes_from_env() -> Self {
        Self {
            per_key_limit: env_parse("LOGIN_CODE_RATE_LIMIT", DEFAULT_LOGIN_CODE_LIMIT),
            global_limit: env_parse("LOGIN_CODE_RATE_GLOBAL", DEFAULT_LOGIN_CODE_GLOBAL_LIMIT),
            window: Duration::from_secs(env_parse("LOGIN_CODE_RATE_WINDOW_SECS", DEFAULT_LOGIN_CODE_WINDOW_SECS)),
        }
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-address rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerKeyExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    /// Per-key request timestamps.
    by_key: HashMap<String, VecDeque<Instant>>,
    /// Global request timestamps.
    global: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    /// Check both windows for `key`, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which window is full. Nothing is recorded on rejection.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        self.check_and_record_at(key, Instant::now())
    }

    fn check_and_record_at(&self, key: &str, now: Instant) -> Result<(), RateLimitError> {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let inner = &mut *guard;
        let cfg = self.config;
        let window_secs = cfg.window.as_secs();

        prune_window(&mut inner.global, now, cfg.window);
        if inner.global.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.global_limit, window_secs });
        }

        let key_deque = inner.by_key.entry(normalize_key(key)).or_default();
        prune_window(key_deque, now, cfg.window);
        if key_deque.len() >= cfg.per_key_limit {
            return Err(RateLimitError::PerKeyExceeded { limit: cfg.per_key_limit, window_secs });
        }

        key_deque.push_back(now);
        inner.global.push_back(now);
        inner.by_key.retain(|_, deque| !deque.is_empty());
        Ok(())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
