//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Caller creates Context (optionally with a deadline)
//!     → client.rs sends and backs off while the context is live
//!     → pollers sleep between polls while the context is live
//!
//! Signals (signals.rs):
//!     SIGINT → cancel the root context
//! ```
//!
//! # Design Decisions
//! - No operation is fire-and-forget; everything is bounded by a context
//! - Cancellation flows from parent to child, never upwards

pub mod context;
pub mod signals;

pub use context::{Context, DoneReason};
