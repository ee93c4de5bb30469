//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ArmConfig (validated, immutable)
//!     → Client / Poller built from it
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::ArmConfig;
pub use schema::CredentialsConfig;
pub use schema::EnvironmentConfig;
pub use schema::ObservabilityConfig;
pub use schema::PollingConfig;
pub use schema::RetryConfig;
pub use schema::TimeoutConfig;
