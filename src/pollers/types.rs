//! Poll results and polling errors.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::client::{ClientError, ErrorDetail};
use crate::lifecycle::DoneReason;

/// Status of a long-running operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PollingStatus {
    InProgress,
    Succeeded,
    Failed,
    Canceled,
}

impl PollingStatus {
    /// Map a `status` or `provisioningState` value.
    ///
    /// Anything not terminal (`Accepted`, `Creating`, `Updating`, ...) is in progress.
    pub fn from_state(state: &str) -> Self {
        match state.to_ascii_lowercase().as_str() {
            "succeeded" => PollingStatus::Succeeded,
            "failed" => PollingStatus::Failed,
            "canceled" | "cancelled" => PollingStatus::Canceled,
            _ => PollingStatus::InProgress,
        }
    }

    /// Read the status from an operation or resource body.
    ///
    /// Looks at `status` first, then `properties.provisioningState`.
    pub fn from_body(body: &Value) -> Option<Self> {
        body.get("status")
            .and_then(Value::as_str)
            .or_else(|| {
                body.get("properties")?
                    .get("provisioningState")?
                    .as_str()
            })
            .map(Self::from_state)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollingStatus::InProgress)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PollingStatus::InProgress => "InProgress",
            PollingStatus::Succeeded => "Succeeded",
            PollingStatus::Failed => "Failed",
            PollingStatus::Canceled => "Canceled",
        }
    }
}

impl std::fmt::Display for PollingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single poll.
#[derive(Debug, Clone, PartialEq)]
pub struct PollResult {
    pub status: PollingStatus,
    /// Server-suggested wait before the next poll.
    pub poll_interval: Option<Duration>,
    /// Final representation once succeeded, or the last body observed.
    pub body: Option<Value>,
    /// Error embedded in a failed or canceled operation.
    pub error: Option<ErrorDetail>,
}

impl PollResult {
    pub fn in_progress(poll_interval: Option<Duration>) -> Self {
        Self {
            status: PollingStatus::InProgress,
            poll_interval,
            body: None,
            error: None,
        }
    }

    pub fn succeeded(body: Option<Value>) -> Self {
        Self {
            status: PollingStatus::Succeeded,
            poll_interval: None,
            body,
            error: None,
        }
    }

    /// A result for `status`, taking any embedded error from `body`.
    pub fn from_body(status: PollingStatus, body: Option<Value>, poll_interval: Option<Duration>) -> Self {
        let error = match status {
            PollingStatus::Failed | PollingStatus::Canceled => {
                body.as_ref().and_then(ErrorDetail::from_body)
            }
            _ => None,
        };
        Self {
            status,
            poll_interval,
            body,
            error,
        }
    }
}

/// Errors ending a long-running operation.
#[derive(Debug, Error)]
pub enum PollingError {
    #[error("the long-running operation failed: {}", describe(.error))]
    Failed { error: Option<ErrorDetail> },

    #[error("the long-running operation was canceled: {}", describe(.error))]
    Canceled { error: Option<ErrorDetail> },

    #[error("polling stopped: {0}")]
    ContextDone(DoneReason),

    #[error("unexpected polling response: {0}")]
    Unexpected(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl PollingError {
    /// The embedded ARM error of a failed or canceled operation.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            PollingError::Failed { error } | PollingError::Canceled { error } => error.as_ref(),
            _ => None,
        }
    }
}

fn describe(error: &Option<ErrorDetail>) -> String {
    match error {
        Some(detail) => detail.to_string(),
        None => "no error details were returned".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_mapping() {
        assert_eq!(PollingStatus::from_state("Succeeded"), PollingStatus::Succeeded);
        assert_eq!(PollingStatus::from_state("FAILED"), PollingStatus::Failed);
        assert_eq!(PollingStatus::from_state("Cancelled"), PollingStatus::Canceled);
        assert_eq!(PollingStatus::from_state("Updating"), PollingStatus::InProgress);
        assert_eq!(PollingStatus::from_state("Accepted"), PollingStatus::InProgress);
    }

    #[test]
    fn test_status_from_body() {
        assert_eq!(
            PollingStatus::from_body(&json!({"status": "InProgress"})),
            Some(PollingStatus::InProgress)
        );
        assert_eq!(
            PollingStatus::from_body(&json!({"properties": {"provisioningState": "Succeeded"}})),
            Some(PollingStatus::Succeeded)
        );
        assert_eq!(PollingStatus::from_body(&json!({"name": "x"})), None);
    }

    #[test]
    fn test_failed_result_carries_error() {
        let body = json!({"status": "Failed", "error": {"code": "Conflict", "message": "busy"}});
        let result = PollResult::from_body(PollingStatus::Failed, Some(body), None);
        assert_eq!(result.error.unwrap().code, "Conflict");
    }

    #[test]
    fn test_failed_error_message() {
        let err = PollingError::Failed {
            error: Some(ErrorDetail {
                code: "Conflict".to_string(),
                message: "busy".to_string(),
                ..Default::default()
            }),
        };
        assert!(err.to_string().contains("Conflict"));
        assert_eq!(err.detail().unwrap().message, "busy");
    }
}
