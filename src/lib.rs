//! Azure Resource Manager client core.
//!
//! Typed resource IDs, a retrying request pipeline, long-running operation
//! pollers and discriminated-union response models.

// Identifiers
pub mod commonids;
pub mod resourceids;

// Request pipeline
pub mod client;
pub mod models;
pub mod pollers;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use client::{ApiError, Client, ClientError, RequestOptions, Response};
pub use config::ArmConfig;
pub use lifecycle::Context;
pub use pollers::{Poller, PollerType, PollingError, PollingStatus};
pub use resourceids::{ParseError, ResourceId};
