//! Request building.
//!
//! # Responsibilities
//! - Describe one ARM call: method, path, api-version, query, headers, body
//! - Declare the statuses the caller treats as success
//! - Resolve the final URL against the configured endpoint
//!
//! # Design Decisions
//! - Paths are resource IDs (`/subscriptions/...`) joined onto the endpoint
//! - Absolute URLs (nextLink, polling URLs) are used verbatim
//! - An `api-version` already present in the URL is kept, never duplicated

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use url::Url;

use crate::client::error::ClientError;

/// Query parameter carrying the API version.
pub const API_VERSION_PARAM: &str = "api-version";

/// A single request to Resource Manager.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Resource path or absolute URL.
    pub path: String,
    pub api_version: Option<String>,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
    /// Statuses returned to the caller as success. Anything else is an API error.
    pub expected_status_codes: Vec<StatusCode>,
}

impl RequestOptions {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            api_version: None,
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            expected_status_codes: vec![StatusCode::OK],
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path).expected(&[200, 201, 202])
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path).expected(&[200, 202])
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path).expected(&[200, 202, 204])
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path).expected(&[200, 202, 204])
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serialize `body` as the JSON request payload.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(serde_json::to_value(body).map_err(ClientError::Encode)?);
        Ok(self)
    }

    /// Replace the set of success statuses.
    ///
    /// Unknown codes are ignored.
    pub fn expected(mut self, codes: &[u16]) -> Self {
        self.expected_status_codes = codes
            .iter()
            .filter_map(|c| StatusCode::from_u16(*c).ok())
            .collect();
        self
    }

    pub fn is_expected(&self, status: StatusCode) -> bool {
        self.expected_status_codes.contains(&status)
    }

    /// Resolve the request URL against `endpoint`.
    pub fn url(&self, endpoint: &Url) -> Result<Url, ClientError> {
        let parsed = if is_absolute(&self.path) {
            Url::parse(&self.path)
        } else {
            endpoint.join(&self.path)
        };
        let mut url = parsed.map_err(|source| ClientError::Url {
            url: self.path.clone(),
            source,
        })?;

        let has_api_version = url.query_pairs().any(|(k, _)| k == API_VERSION_PARAM);
        if self.api_version.is_some() || !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            if let (Some(version), false) = (&self.api_version, has_api_version) {
                pairs.append_pair(API_VERSION_PARAM, version);
            }
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("https://") || path.starts_with("http://")
}
