//! Convenience operations on [`Client`].
//!
//! Each `*_then_poll` variant sends the request, selects a poller from the
//! initial response and drives it to completion.

use std::collections::HashSet;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::client::error::ClientError;
use crate::client::request::RequestOptions;
use crate::client::response::{OperationResponse, Response};
use crate::client::sender::Client;
use crate::lifecycle::Context;
use crate::models::ListResult;
use crate::pollers::{poller_from_response, Poller, PollingError};

impl Client {
    /// GET a resource and decode it.
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
    ) -> Result<OperationResponse<T>, ClientError> {
        let options = RequestOptions::get(id).api_version(api_version);
        OperationResponse::new(self.execute(ctx, &options).await?)
    }

    /// PUT a resource. The response may start a long-running operation.
    pub async fn create_or_update<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
        body: &B,
    ) -> Result<Response, ClientError> {
        let options = RequestOptions::put(id).api_version(api_version).json(body)?;
        self.execute(ctx, &options).await
    }

    /// PATCH a resource.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
        body: &B,
    ) -> Result<Response, ClientError> {
        let options = RequestOptions::patch(id).api_version(api_version).json(body)?;
        self.execute(ctx, &options).await
    }

    /// DELETE a resource.
    pub async fn delete(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
    ) -> Result<Response, ClientError> {
        let options = RequestOptions::delete(id).api_version(api_version);
        self.execute(ctx, &options).await
    }

    /// POST an action, e.g. `.../restart` or `.../listKeys`.
    pub async fn post(
        &self,
        ctx: &Context,
        path: &str,
        api_version: &str,
        body: Option<&Value>,
    ) -> Result<Response, ClientError> {
        let mut options = RequestOptions::post(path).api_version(api_version);
        if let Some(body) = body {
            options = options.json(body)?;
        }
        self.execute(ctx, &options).await
    }

    /// PUT and wait for provisioning to finish. Returns the final resource.
    pub async fn create_or_update_then_poll<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
        body: &B,
    ) -> Result<Option<Value>, PollingError> {
        let response = self.create_or_update(ctx, id, api_version, body).await?;
        self.poll_response(ctx, &Method::PUT, &response).await
    }

    /// PATCH and wait for the update to finish. Returns the final resource.
    pub async fn update_then_poll<B: Serialize + ?Sized>(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
        body: &B,
    ) -> Result<Option<Value>, PollingError> {
        let response = self.update(ctx, id, api_version, body).await?;
        self.poll_response(ctx, &Method::PATCH, &response).await
    }

    /// DELETE and wait for the resource to be gone.
    pub async fn delete_then_poll(
        &self,
        ctx: &Context,
        id: &str,
        api_version: &str,
    ) -> Result<(), PollingError> {
        let response = self.delete(ctx, id, api_version).await?;
        self.poll_response(ctx, &Method::DELETE, &response).await?;
        Ok(())
    }

    /// POST and wait for the action to finish. Returns its result, if any.
    pub async fn post_then_poll(
        &self,
        ctx: &Context,
        path: &str,
        api_version: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, PollingError> {
        let response = self.post(ctx, path, api_version, body).await?;
        self.poll_response(ctx, &Method::POST, &response).await
    }

    /// Build a poller for `response` without driving it.
    pub fn poller_for(&self, method: &Method, response: &Response) -> Result<Poller, PollingError> {
        poller_from_response(self, method, response)
    }

    async fn poll_response(
        &self,
        ctx: &Context,
        method: &Method,
        response: &Response,
    ) -> Result<Option<Value>, PollingError> {
        let mut poller = self.poller_for(method, response)?;
        poller.poll_until_done(ctx).await
    }

    /// GET every page of a list, following `nextLink` until it is absent.
    ///
    /// Stops with a warning if a `nextLink` points back at a page already fetched.
    pub async fn list_all<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
        api_version: &str,
    ) -> Result<Vec<T>, ClientError> {
        let mut items = Vec::new();
        let mut options = RequestOptions::get(path).api_version(api_version);
        let mut seen = HashSet::new();

        loop {
            seen.insert(options.url(self.endpoint())?.to_string());

            let response = self.execute(ctx, &options).await?;
            let page: ListResult<T> = response.model()?;
            items.extend(page.value);

            let Some(next) = page.next_link.filter(|link| !link.is_empty()) else {
                break;
            };
            let next_options = RequestOptions::get(next).api_version(api_version);
            if seen.contains(next_options.url(self.endpoint())?.as_str()) {
                tracing::warn!(
                    next_link = %next_options.path,
                    pages = seen.len(),
                    "List nextLink points at a page already fetched, stopping"
                );
                break;
            }
            options = next_options;
        }

        tracing::debug!(path = %path, pages = seen.len(), items = items.len(), "Listed resources");
        Ok(items)
    }
}
