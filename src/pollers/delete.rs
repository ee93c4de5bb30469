//! Polling a deleted resource until it is gone.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::client::{Client, RequestOptions};
use crate::lifecycle::Context;
use crate::pollers::poller::PollerType;
use crate::pollers::types::{PollResult, PollingError};

/// Re-reads a resource until it returns 404.
#[derive(Debug)]
pub struct DeletePoller {
    client: Client,
    resource_url: String,
}

impl DeletePoller {
    /// `resource_url` should carry its `api-version`.
    pub fn new(client: Client, resource_url: impl Into<String>) -> Self {
        Self {
            client,
            resource_url: resource_url.into(),
        }
    }
}

#[async_trait]
impl PollerType for DeletePoller {
    fn name(&self) -> &'static str {
        "delete"
    }

    async fn poll(&mut self, ctx: &Context) -> Result<PollResult, PollingError> {
        let options = RequestOptions::get(self.resource_url.clone()).expected(&[200, 404]);
        let response = self.client.execute(ctx, &options).await?;
        if response.status == StatusCode::NOT_FOUND {
            return Ok(PollResult::succeeded(None));
        }
        Ok(PollResult::in_progress(response.retry_after()))
    }
}
