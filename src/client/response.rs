//! Buffered responses and model decoding.

use std::borrow::Cow;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::error::ClientError;
use crate::resilience::retry_after;

/// A fully buffered response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Final URL of the request, including the query string.
    pub url: Url,
    /// Client request ID sent with the request.
    pub request_id: String,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// The body as JSON, `None` when the body is empty.
    pub fn json(&self) -> Result<Option<serde_json::Value>, ClientError> {
        if self.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&self.body)
            .map(Some)
            .map_err(|source| self.decode_error(source))
    }

    /// Decode the body into `T`.
    pub fn model<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_slice(&self.body).map_err(|source| self.decode_error(source))
    }

    /// The `nextLink` of a list page, if any.
    pub fn next_link(&self) -> Option<String> {
        self.json()
            .ok()
            .flatten()?
            .get("nextLink")?
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    /// Server-requested wait before the next request.
    pub fn retry_after(&self) -> Option<Duration> {
        retry_after(&self.headers)
    }

    fn decode_error(&self, source: serde_json::Error) -> ClientError {
        ClientError::Decode {
            url: self.url.to_string(),
            source,
        }
    }
}

/// A response together with its decoded model.
#[derive(Debug, Clone)]
pub struct OperationResponse<T> {
    pub response: Response,
    pub model: Option<T>,
}

impl<T: DeserializeOwned> OperationResponse<T> {
    /// Decode the model when the body is non-empty.
    pub fn new(response: Response) -> Result<Self, ClientError> {
        let model = if response.is_empty() {
            None
        } else {
            Some(response.model()?)
        };
        Ok(Self { response, model })
    }
}
