//! Metrics collection.
//!
//! # Metrics
//! - `arm_requests_total` (counter): requests by method, status
//! - `arm_request_duration_seconds` (histogram): latency per attempt
//! - `arm_request_retries_total` (counter): retried attempts by reason
//! - `arm_polls_total` (counter): LRO polls by poller and observed status
//!
//! # Design Decisions
//! - Only the `metrics` facade is used; installing a recorder/exporter is up to the host
//! - Without a recorder every call is a no-op

use std::time::Instant;

use metrics::{counter, histogram};

/// Record a completed request attempt.
pub fn record_request(method: &str, status: u16, start: Instant) {
    counter!(
        "arm_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("arm_request_duration_seconds", "method" => method.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record a retried attempt.
pub fn record_retry(method: &str, reason: &'static str) {
    counter!(
        "arm_request_retries_total",
        "method" => method.to_string(),
        "reason" => reason
    )
    .increment(1);
}

/// Record one LRO poll.
pub fn record_poll(poller: &'static str, status: &'static str) {
    counter!("arm_polls_total", "poller" => poller, "status" => status).increment(1);
}
