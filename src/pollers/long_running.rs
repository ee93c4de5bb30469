//! Polling via `Azure-AsyncOperation` or `Location`.
//!
//! # Data Flow
//! ```text
//! PUT/PATCH/POST/DELETE → 201/202 + Azure-AsyncOperation | Location
//!     → GET polling URL (repeat while InProgress / 202)
//!     → terminal status
//!     → on success: GET the final URL (resource for PUT/PATCH, Location for POST)
//! ```
//!
//! # Design Decisions
//! - `Azure-AsyncOperation` is preferred when both headers are present
//! - On a `Location` URL, 202 means in progress and 200/201/204 means done
//! - An operation body without a status is taken at face value from the HTTP status

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::client::{Client, RequestOptions, Response};
use crate::lifecycle::Context;
use crate::pollers::poller::PollerType;
use crate::pollers::types::{PollResult, PollingError, PollingStatus};

pub const AZURE_ASYNC_OPERATION_HEADER: &str = "azure-asyncoperation";
pub const LOCATION_HEADER: &str = "location";

/// Which header the polling URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollingUrlKind {
    AzureAsyncOperation,
    Location,
}

/// Polls the operation URL returned by the initial request.
#[derive(Debug)]
pub struct LongRunningPoller {
    client: Client,
    polling_url: String,
    kind: PollingUrlKind,
    /// Fetched after success to obtain the final representation.
    final_url: Option<String>,
}

impl LongRunningPoller {
    /// Build from the initial response, or `None` if it names no polling URL.
    pub fn from_response(client: Client, method: &Method, response: &Response) -> Option<Self> {
        let async_operation = response.header(AZURE_ASYNC_OPERATION_HEADER);
        let location = response.header(LOCATION_HEADER);

        let (polling_url, kind) = match (async_operation, location) {
            (Some(url), _) => (url, PollingUrlKind::AzureAsyncOperation),
            (None, Some(url)) => (url, PollingUrlKind::Location),
            (None, None) => return None,
        };

        let final_url = match *method {
            Method::PUT | Method::PATCH => Some(response.url.to_string()),
            Method::POST => match (kind, location) {
                (PollingUrlKind::AzureAsyncOperation, Some(location)) => Some(location.to_string()),
                _ => None,
            },
            _ => None,
        };

        Some(Self {
            client,
            polling_url: polling_url.to_string(),
            kind,
            final_url,
        })
    }

    pub fn polling_url(&self) -> &str {
        &self.polling_url
    }

    pub fn kind(&self) -> PollingUrlKind {
        self.kind
    }

    async fn final_result(&self, ctx: &Context, body: Option<Value>) -> Result<Option<Value>, PollingError> {
        let Some(url) = &self.final_url else {
            return Ok(match self.kind {
                PollingUrlKind::Location => body,
                PollingUrlKind::AzureAsyncOperation => None,
            });
        };

        let options = RequestOptions::get(url.clone()).expected(&[200, 204]);
        let response = self.client.execute(ctx, &options).await?;
        Ok(response.json()?)
    }
}

#[async_trait]
impl PollerType for LongRunningPoller {
    fn name(&self) -> &'static str {
        match self.kind {
            PollingUrlKind::AzureAsyncOperation => "azure_async_operation",
            PollingUrlKind::Location => "location",
        }
    }

    async fn poll(&mut self, ctx: &Context) -> Result<PollResult, PollingError> {
        // 1. Check the operation
        let options = RequestOptions::get(self.polling_url.clone()).expected(&[200, 201, 202, 204]);
        let response = self.client.execute(ctx, &options).await?;
        let interval = response.retry_after();
        let body = response.json()?;

        // 2. Work out where it stands
        let status = match body.as_ref().and_then(PollingStatus::from_body) {
            Some(status) => status,
            None if response.status == StatusCode::ACCEPTED => PollingStatus::InProgress,
            None => PollingStatus::Succeeded,
        };

        // 3. Fetch the final representation on success
        match status {
            PollingStatus::Succeeded => {
                let final_body = self.final_result(ctx, body).await?;
                Ok(PollResult::succeeded(final_body))
            }
            other => Ok(PollResult::from_body(other, body, interval)),
        }
    }
}
