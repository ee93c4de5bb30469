//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to ARM:
//!     → client sender (per-attempt timeout from config)
//!     → On failure: retries.rs (check if retryable, pick delay)
//!     → backoff.rs (exponential delay with jitter when no Retry-After)
//! ```
//!
//! # Design Decisions
//! - Retries live at the transport layer, separate from LRO polling
//! - Sleeps between attempts are bounded by the caller's context

pub mod backoff;
pub mod retries;

pub use retries::{is_retryable, retry_after, RetryPolicy};
