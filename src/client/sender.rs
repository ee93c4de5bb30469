//! The HTTP sender.
//!
//! # Responsibilities
//! - Own the pooled HTTP client, endpoint and authorizer
//! - Send a request, retrying throttling/server errors and dropped connections
//! - Map unexpected statuses to [`ApiError`]
//!
//! # Design Decisions
//! - One client request ID per logical request, reused across attempts
//! - Every attempt and every backoff sleep observes the caller's context
//! - The whole body is buffered; ARM payloads are small JSON documents

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderValue, ACCEPT};
use url::Url;
use uuid::Uuid;

use crate::client::auth::Authorizer;
use crate::client::error::{ApiError, ClientError};
use crate::client::request::RequestOptions;
use crate::client::response::Response;
use crate::config::{ArmConfig, PollingConfig};
use crate::lifecycle::{Context, DoneReason};
use crate::observability::metrics;
use crate::resilience::{is_retryable, RetryPolicy};

/// Header carrying the per-request correlation ID.
pub const CLIENT_REQUEST_ID_HEADER: &str = "x-ms-client-request-id";

/// A Resource Manager client.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    authorizer: Option<Arc<dyn Authorizer>>,
    retry: RetryPolicy,
    polling: PollingConfig,
}

impl Client {
    pub fn new(config: &ArmConfig) -> Result<Self, ClientError> {
        let endpoint = Url::parse(&config.environment.resource_manager_endpoint).map_err(
            |source| ClientError::Url {
                url: config.environment.resource_manager_endpoint.clone(),
                source,
            },
        )?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .user_agent(config.environment.user_agent.clone())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint,
            authorizer: None,
            retry: RetryPolicy::new(&config.retries),
            polling: config.polling.clone(),
        })
    }

    pub fn with_authorizer(mut self, authorizer: Arc<dyn Authorizer>) -> Self {
        self.authorizer = Some(authorizer);
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn polling_config(&self) -> &PollingConfig {
        &self.polling
    }

    /// Send a request and return the response if its status is expected.
    pub async fn execute(
        &self,
        ctx: &Context,
        options: &RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = options.url(&self.endpoint)?;
        let request_id = Uuid::new_v4().to_string();
        let method = options.method.as_str().to_string();
        let mut attempt = 0;

        loop {
            if let Some(reason) = ctx.reason() {
                return Err(ClientError::ContextDone {
                    url: url.to_string(),
                    reason,
                });
            }
            attempt += 1;

            let token = match &self.authorizer {
                Some(authorizer) => Some(authorizer.token(ctx).await?),
                None => None,
            };

            let start = Instant::now();
            let outcome = tokio::select! {
                outcome = self.send_once(options, &url, &request_id, token.as_deref()) => outcome,
                _ = ctx.done() => {
                    let reason = ctx.reason().unwrap_or(DoneReason::Cancelled);
                    return Err(ClientError::ContextDone { url: url.to_string(), reason });
                }
            };

            match outcome {
                Ok(response) => {
                    let status = response.status;
                    metrics::record_request(&method, status.as_u16(), start);

                    if options.is_expected(status) {
                        tracing::debug!(
                            request_id = %request_id,
                            method = %method,
                            url = %url,
                            status = status.as_u16(),
                            attempt,
                            "Request completed"
                        );
                        return Ok(response);
                    }

                    if is_retryable(status) && self.retry.should_retry(attempt) {
                        let delay = self.retry.delay(attempt, Some(&response.headers));
                        tracing::info!(
                            request_id = %request_id,
                            attempt,
                            delay = ?delay,
                            status = %status,
                            "Retrying request"
                        );
                        metrics::record_retry(&method, "status");
                        self.wait(ctx, &url, delay).await?;
                        continue;
                    }

                    let error = ApiError::from_response(&method, &response);
                    tracing::debug!(
                        request_id = %request_id,
                        status = status.as_u16(),
                        code = %error.code(),
                        "Unexpected status"
                    );
                    return Err(ClientError::Api(error));
                }
                Err(e) => {
                    tracing::warn!(request_id = %request_id, attempt, error = %e, "Request failed");

                    if !e.is_builder() && self.retry.should_retry(attempt) {
                        let delay = self.retry.delay(attempt, None);
                        tracing::info!(
                            request_id = %request_id,
                            attempt,
                            delay = ?delay,
                            "Retrying after network error"
                        );
                        metrics::record_retry(&method, "transport");
                        self.wait(ctx, &url, delay).await?;
                        continue;
                    }

                    return Err(ClientError::Transport {
                        url: url.to_string(),
                        source: e,
                    });
                }
            }
        }
    }

    async fn send_once(
        &self,
        options: &RequestOptions,
        url: &Url,
        request_id: &str,
        token: Option<&str>,
    ) -> Result<Response, reqwest::Error> {
        let mut builder = self
            .http
            .request(options.method.clone(), url.clone())
            .headers(options.headers.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CLIENT_REQUEST_ID_HEADER, request_id);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let final_url = response.url().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Response {
            status,
            headers,
            body,
            url: final_url,
            request_id: request_id.to_string(),
        })
    }

    async fn wait(&self, ctx: &Context, url: &Url, delay: Duration) -> Result<(), ClientError> {
        if ctx.sleep(delay).await {
            return Ok(());
        }
        Err(ClientError::ContextDone {
            url: url.to_string(),
            reason: ctx.reason().unwrap_or(DoneReason::Cancelled),
        })
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint.as_str())
            .field("retry", &self.retry)
            .field("authorized", &self.authorizer.is_some())
            .finish()
    }
}
