//! Retry logic for the sender.
//!
//! # Responsibilities
//! - Decide whether a response status or transport failure is retryable
//! - Compute the delay before the next attempt (Retry-After, else backoff)
//!
//! # Design Decisions
//! - Retryable statuses: 408, 429 and every 5xx
//! - Transport failures (connect, timeout, reset) are always retryable
//! - A server Retry-After hint wins over computed backoff but is capped
//! - ARM requests are safe to repeat: PUT/PATCH/DELETE are idempotent by contract

use std::time::{Duration, SystemTime};

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;

use crate::config::RetryConfig;
use crate::resilience::backoff::calculate_backoff;

/// Client-error statuses retried at the transport layer. Every 5xx is retried too.
pub const RETRYABLE_CLIENT_ERRORS: &[u16] = &[408, 429];

/// Sender retry policy built from configuration.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
    max_delay_ms: u64,
}

impl RetryPolicy {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_attempts: if config.enabled { config.max_attempts.max(1) } else { 1 },
            base_delay_ms: config.base_delay_ms,
            max_delay_ms: config.max_delay_ms,
        }
    }

    /// A policy that sends each request exactly once.
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Total attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }

    /// Delay before the attempt following `attempt`.
    pub fn delay(&self, attempt: u32, headers: Option<&HeaderMap>) -> Duration {
        let cap = Duration::from_millis(self.max_delay_ms);
        match headers.and_then(retry_after) {
            Some(hint) => hint.min(cap),
            None => calculate_backoff(attempt, self.base_delay_ms, self.max_delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(&RetryConfig::default())
    }
}

/// Whether a response with this status should be retried.
pub fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || RETRYABLE_CLIENT_ERRORS.contains(&status.as_u16())
}

/// Parse a `Retry-After` header given as delay-seconds or an HTTP-date.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    let value = headers.get(RETRY_AFTER)?.to_str().ok()?.trim();
    if let Ok(secs) = value.parse::<u64>() {
        return Some(Duration::from_secs(secs));
    }
    let at = httpdate::parse_http_date(value).ok()?;
    Some(at.duration_since(SystemTime::now()).unwrap_or(Duration::ZERO))
}
