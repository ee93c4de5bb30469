//! Polling a resource's `provisioningState`.

use async_trait::async_trait;

use crate::client::{Client, RequestOptions};
use crate::lifecycle::Context;
use crate::pollers::poller::PollerType;
use crate::pollers::types::{PollResult, PollingError, PollingStatus};

/// Re-reads a resource until its provisioning state is terminal.
///
/// A resource that reports no provisioning state is treated as provisioned.
#[derive(Debug)]
pub struct ProvisioningStatePoller {
    client: Client,
    resource_url: String,
}

impl ProvisioningStatePoller {
    /// `resource_url` should carry its `api-version`.
    pub fn new(client: Client, resource_url: impl Into<String>) -> Self {
        Self {
            client,
            resource_url: resource_url.into(),
        }
    }
}

#[async_trait]
impl PollerType for ProvisioningStatePoller {
    fn name(&self) -> &'static str {
        "provisioning_state"
    }

    async fn poll(&mut self, ctx: &Context) -> Result<PollResult, PollingError> {
        let options = RequestOptions::get(self.resource_url.clone());
        let response = self.client.execute(ctx, &options).await?;
        let body = response.json()?;
        let status = body
            .as_ref()
            .and_then(PollingStatus::from_body)
            .unwrap_or(PollingStatus::Succeeded);
        Ok(PollResult::from_body(status, body, response.retry_after()))
    }
}
