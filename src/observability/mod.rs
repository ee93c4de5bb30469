//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client / pollers produce:
//!     → tracing events (structured fields: method, url, request_id, attempt)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr, text or JSON)
//!     → whatever metrics recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Client request ID flows through every log line of a request
//! - The library never installs global state; binaries call `logging::init`

pub mod logging;
pub mod metrics;
