//! Long-running operation pollers.
//!
//! # Data Flow
//! ```text
//! initial response (Client::execute)
//!     → poller_from_response (pick a strategy)
//!     → Poller::poll_until_done
//!         → PollerType::poll (one GET; transport retries happen in the client)
//!         → InProgress: sleep Retry-After or the default interval, poll again
//!         → Succeeded: final representation
//!         → Failed / Canceled: embedded error
//! ```
//!
//! # Design Decisions
//! - Strategies sit behind the `PollerType` trait; the driver owns the loop
//! - Every poll and every sleep observes the caller's `Context`
//! - Dropped connections are tolerated up to a configured count
//! - Synchronously completed operations yield an already-finished poller

pub mod delete;
pub mod long_running;
pub mod poller;
pub mod provisioning_state;
pub mod types;

pub use delete::DeletePoller;
pub use long_running::{LongRunningPoller, PollingUrlKind};
pub use poller::{Poller, PollerType};
pub use provisioning_state::ProvisioningStatePoller;
pub use types::{PollResult, PollingError, PollingStatus};

use std::time::Duration;

use reqwest::{Method, StatusCode};

use crate::client::{Client, Response};

/// Pick a polling strategy for the initial response of `method`.
///
/// - A 201/202 naming `Azure-AsyncOperation` or `Location` polls that URL
/// - A PUT/PATCH body with a non-terminal `provisioningState` re-reads the resource
/// - A 202 to DELETE with no polling URL re-reads the resource until 404
/// - Anything else is already done
pub fn poller_from_response(
    client: &Client,
    method: &Method,
    response: &Response,
) -> Result<Poller, PollingError> {
    let config = client.polling_config().clone();
    let initial_delay = response
        .retry_after()
        .unwrap_or(Duration::from_secs(config.default_interval_secs));
    let body = response.json()?;

    if matches!(response.status, StatusCode::CREATED | StatusCode::ACCEPTED) {
        if let Some(lro) = LongRunningPoller::from_response(client.clone(), method, response) {
            tracing::debug!(
                method = %method,
                url = %response.url,
                polling_url = %lro.polling_url(),
                kind = ?lro.kind(),
                "Polling long-running operation"
            );
            return Ok(Poller::new(Box::new(lro), &config).with_initial_delay(initial_delay));
        }
    }

    let status = body.as_ref().and_then(PollingStatus::from_body);

    if matches!(*method, Method::PUT | Method::PATCH) {
        if let Some(PollingStatus::InProgress) = status {
            let poller = ProvisioningStatePoller::new(client.clone(), response.url.to_string());
            return Ok(Poller::new(Box::new(poller), &config).with_initial_delay(initial_delay));
        }
    }

    if *method == Method::DELETE && response.status == StatusCode::ACCEPTED {
        let poller = DeletePoller::new(client.clone(), response.url.to_string());
        return Ok(Poller::new(Box::new(poller), &config).with_initial_delay(initial_delay));
    }

    let result = match status {
        Some(status) if status.is_terminal() => PollResult::from_body(status, body, None),
        _ => PollResult::succeeded(body),
    };
    Ok(Poller::completed(result))
}
