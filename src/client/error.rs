//! Client and API error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::response::Response;
use crate::lifecycle::DoneReason;

/// The ARM error payload (`{"error": {...}}`), also embedded in failed operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl ErrorDetail {
    /// Extract an error from a response or operation body.
    ///
    /// Accepts the `{"error": {...}}` envelope, an error nested under
    /// `properties`, or a flat `{"code", "message"}` object.
    pub fn from_body(body: &serde_json::Value) -> Option<Self> {
        let candidate = body
            .get("error")
            .or_else(|| body.get("properties").and_then(|p| p.get("error")))
            .unwrap_or(body);
        let detail: ErrorDetail = serde_json::from_value(candidate.clone()).ok()?;
        if detail.code.is_empty() && detail.message.is_empty() {
            None
        } else {
            Some(detail)
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code={:?} Message={:?}", self.code, self.message)?;
        for detail in &self.details {
            write!(f, "\n  {}: {}", detail.code, detail.message)?;
        }
        Ok(())
    }
}

/// An unexpected status returned by Resource Manager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected status {status} from {method} {url}: {detail}")]
pub struct ApiError {
    pub status: u16,
    pub method: String,
    pub url: String,
    pub detail: ErrorDetail,
    /// Client request ID sent with the request (`x-ms-client-request-id`).
    pub request_id: String,
    /// Raw response body.
    pub body: String,
}

impl ApiError {
    pub fn from_response(method: &str, response: &Response) -> Self {
        let body = response.text().into_owned();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| ErrorDetail::from_body(&v))
            .unwrap_or_else(|| ErrorDetail {
                code: response
                    .status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .replace(' ', ""),
                message: body.clone(),
                ..ErrorDetail::default()
            });

        Self {
            status: response.status.as_u16(),
            method: method.to_string(),
            url: response.url.to_string(),
            detail,
            request_id: response.request_id.clone(),
            body,
        }
    }

    pub fn code(&self) -> &str {
        &self.detail.code
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Errors produced while sending a request.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("sending request to {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid request URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("decoding response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("authorizing request: {0}")]
    Auth(String),

    #[error("request to {url} abandoned: {reason}")]
    ContextDone { url: String, reason: DoneReason },

    #[error("building HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api(e) => Some(e.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True for transport-level failures (connection dropped, timeout).
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport { .. })
    }
}
