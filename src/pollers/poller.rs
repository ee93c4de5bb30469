//! The generic polling driver.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::ClientError;
use crate::config::PollingConfig;
use crate::lifecycle::{Context, DoneReason};
use crate::observability::metrics;
use crate::pollers::types::{PollResult, PollingError, PollingStatus};

/// A strategy for checking on a long-running operation.
#[async_trait]
pub trait PollerType: Send {
    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Check the operation once.
    async fn poll(&mut self, ctx: &Context) -> Result<PollResult, PollingError>;
}

/// Drives a [`PollerType`] until the operation reaches a terminal state.
pub struct Poller {
    poller: Box<dyn PollerType>,
    initial_delay: Duration,
    default_interval: Duration,
    max_dropped_connections: u32,
    timeout: Option<Duration>,
    polls: u32,
    latest: Option<PollResult>,
}

impl Poller {
    pub fn new(poller: Box<dyn PollerType>, config: &PollingConfig) -> Self {
        Self {
            poller,
            initial_delay: Duration::ZERO,
            default_interval: Duration::from_secs(config.default_interval_secs),
            max_dropped_connections: config.max_dropped_connections,
            timeout: (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs)),
            polls: 0,
            latest: None,
        }
    }

    /// A poller for an operation that already finished.
    pub fn completed(result: PollResult) -> Self {
        Self::new(
            Box::new(CompletedPoller { result }),
            &PollingConfig::default(),
        )
    }

    /// Wait this long before the first poll.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Interval used when a poll carries no server hint.
    pub fn with_default_interval(mut self, interval: Duration) -> Self {
        self.default_interval = interval;
        self
    }

    pub fn name(&self) -> &'static str {
        self.poller.name()
    }

    /// Number of polls issued so far.
    pub fn poll_count(&self) -> u32 {
        self.polls
    }

    pub fn latest_status(&self) -> Option<PollingStatus> {
        self.latest.as_ref().map(|r| r.status)
    }

    pub fn latest_result(&self) -> Option<&PollResult> {
        self.latest.as_ref()
    }

    /// Poll until the operation succeeds, fails, is canceled, or `ctx` ends.
    ///
    /// Returns the final representation on success, if the operation has one.
    pub async fn poll_until_done(&mut self, ctx: &Context) -> Result<Option<Value>, PollingError> {
        let ctx = match self.timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx.child(),
        };

        if !self.initial_delay.is_zero() && !ctx.sleep(self.initial_delay).await {
            return Err(context_done(&ctx));
        }

        let mut dropped = 0u32;
        loop {
            if ctx.is_done() {
                return Err(context_done(&ctx));
            }

            self.polls += 1;
            let result = match self.poller.poll(&ctx).await {
                Ok(result) => {
                    dropped = 0;
                    result
                }
                Err(PollingError::Client(ClientError::ContextDone { reason, .. })) => {
                    return Err(PollingError::ContextDone(reason));
                }
                Err(PollingError::Client(e))
                    if e.is_transport() && dropped < self.max_dropped_connections =>
                {
                    dropped += 1;
                    tracing::warn!(
                        poller = self.poller.name(),
                        dropped,
                        error = %e,
                        "Dropped connection while polling"
                    );
                    if !ctx.sleep(self.default_interval).await {
                        return Err(context_done(&ctx));
                    }
                    continue;
                }
                Err(e) => return Err(e),
            };

            metrics::record_poll(self.poller.name(), result.status.as_str());
            tracing::debug!(
                poller = self.poller.name(),
                poll = self.polls,
                status = %result.status,
                "Polled long-running operation"
            );
            self.latest = Some(result.clone());

            match result.status {
                PollingStatus::Succeeded => return Ok(result.body),
                PollingStatus::Failed => return Err(PollingError::Failed { error: result.error }),
                PollingStatus::Canceled => {
                    return Err(PollingError::Canceled { error: result.error })
                }
                PollingStatus::InProgress => {
                    let interval = result.poll_interval.unwrap_or(self.default_interval);
                    if !ctx.sleep(interval).await {
                        return Err(context_done(&ctx));
                    }
                }
            }
        }
    }

    /// Like [`poll_until_done`](Self::poll_until_done), decoding the final model.
    pub async fn poll_until_done_as<T: DeserializeOwned>(
        &mut self,
        ctx: &Context,
    ) -> Result<Option<T>, PollingError> {
        match self.poll_until_done(ctx).await? {
            Some(body) => serde_json::from_value(body)
                .map(Some)
                .map_err(|e| PollingError::Unexpected(format!("decoding final result: {e}"))),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for Poller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Poller")
            .field("poller", &self.poller.name())
            .field("polls", &self.polls)
            .field("latest_status", &self.latest_status())
            .finish()
    }
}

fn context_done(ctx: &Context) -> PollingError {
    PollingError::ContextDone(ctx.reason().unwrap_or(DoneReason::Cancelled))
}

/// Reports a result known up front.
struct CompletedPoller {
    result: PollResult,
}

#[async_trait]
impl PollerType for CompletedPoller {
    fn name(&self) -> &'static str {
        "completed"
    }

    async fn poll(&mut self, _ctx: &Context) -> Result<PollResult, PollingError> {
        Ok(self.result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ErrorDetail;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    /// Replays a fixed sequence of statuses.
    struct ScriptedPoller {
        script: VecDeque<PollResult>,
        calls: Arc<AtomicU32>,
    }

    impl ScriptedPoller {
        fn new(script: Vec<PollResult>) -> (Self, Arc<AtomicU32>) {
            let calls = Arc::new(AtomicU32::new(0));
            (
                Self {
                    script: script.into(),
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl PollerType for ScriptedPoller {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn poll(&mut self, _ctx: &Context) -> Result<PollResult, PollingError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .script
                .pop_front()
                .unwrap_or_else(|| PollResult::in_progress(None)))
        }
    }

    fn fast_config() -> PollingConfig {
        PollingConfig {
            default_interval_secs: 0,
            max_dropped_connections: 2,
            timeout_secs: 0,
        }
    }

    #[tokio::test]
    async fn test_polls_until_succeeded() {
        let (scripted, calls) = ScriptedPoller::new(vec![
            PollResult::in_progress(None),
            PollResult::in_progress(Some(Duration::from_millis(1))),
            PollResult::succeeded(Some(json!({"name": "vnet1"}))),
        ]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config());

        let body = poller.poll_until_done(&Context::new()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(poller.poll_count(), 3);
        assert_eq!(body.unwrap()["name"], "vnet1");
        assert_eq!(poller.latest_status(), Some(PollingStatus::Succeeded));
    }

    #[tokio::test]
    async fn test_failed_returns_embedded_error() {
        let failed = PollResult::from_body(
            PollingStatus::Failed,
            Some(json!({"status": "Failed", "error": {"code": "SkuNotAvailable", "message": "no capacity"}})),
            None,
        );
        let (scripted, calls) = ScriptedPoller::new(vec![PollResult::in_progress(None), failed]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config());

        let err = poller.poll_until_done(&Context::new()).await.unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        match err {
            PollingError::Failed { error: Some(ErrorDetail { code, .. }) } => {
                assert_eq!(code, "SkuNotAvailable")
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_canceled_operation() {
        let (scripted, _) = ScriptedPoller::new(vec![PollResult::from_body(
            PollingStatus::Canceled,
            None,
            None,
        )]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config());
        let err = poller.poll_until_done(&Context::new()).await.unwrap_err();
        assert!(matches!(err, PollingError::Canceled { error: None }));
    }

    #[tokio::test]
    async fn test_cancellation_stops_polling() {
        let (scripted, calls) = ScriptedPoller::new(vec![]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config())
            .with_default_interval(Duration::from_secs(3600));
        let ctx = Context::new();

        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let started = std::time::Instant::now();
        let err = poller.poll_until_done(&ctx).await.unwrap_err();

        assert!(matches!(err, PollingError::ContextDone(DoneReason::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deadline_reported() {
        let (scripted, _) = ScriptedPoller::new(vec![]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config())
            .with_default_interval(Duration::from_secs(3600));
        let ctx = Context::new().with_timeout(Duration::from_millis(10));

        let err = poller.poll_until_done(&ctx).await.unwrap_err();
        assert!(matches!(err, PollingError::ContextDone(DoneReason::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_already_cancelled_context_issues_no_poll() {
        let (scripted, calls) = ScriptedPoller::new(vec![]);
        let mut poller = Poller::new(Box::new(scripted), &fast_config());
        let ctx = Context::new();
        ctx.cancel();

        assert!(poller.poll_until_done(&ctx).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_completed_poller() {
        let mut poller = Poller::completed(PollResult::succeeded(Some(json!({"id": "x"}))));
        let body = poller.poll_until_done(&Context::new()).await.unwrap();
        assert_eq!(body.unwrap()["id"], "x");
    }

    #[tokio::test]
    async fn test_decode_final_model() {
        #[derive(serde::Deserialize)]
        struct Named {
            name: String,
        }
        let mut poller = Poller::completed(PollResult::succeeded(Some(json!({"name": "kv1"}))));
        let model: Named = poller
            .poll_until_done_as(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(model.name, "kv1");
    }
}
