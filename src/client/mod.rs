//! Resource Manager HTTP client.
//!
//! # Data Flow
//! ```text
//! RequestOptions (request.rs)
//!     → Client::execute (sender.rs)
//!         → URL against endpoint, bearer token, x-ms-client-request-id
//!         → send; 408/429/5xx and dropped connections retried (resilience)
//!         → expected status? Response : ApiError (error.rs)
//!     → Response (response.rs): decode model, nextLink, Retry-After
//!     → pollers (for 201/202 long-running operations)
//! ```
//!
//! # Design Decisions
//! - The client is cloned freely; clones share one connection pool
//! - Status validation happens in the sender so every caller gets typed errors
//! - Convenience operations (operations.rs) cover get/put/patch/delete/post/list

pub mod auth;
pub mod error;
pub mod operations;
pub mod request;
pub mod response;
pub mod sender;

pub use auth::{Authorizer, StaticTokenAuthorizer};
pub use error::{ApiError, ClientError, ErrorDetail};
pub use request::{RequestOptions, API_VERSION_PARAM};
pub use response::{OperationResponse, Response};
pub use sender::{Client, CLIENT_REQUEST_ID_HEADER};
