//! Example API client.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::config::{ClientConfig, StatusPolicy};
use crate::endpoints::{ITEMS, ItemsResponse, SUBMIT, SubmitItemRequest};
use crate::error::Error;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{ApiKey, BaseUrl};
use crate::Result;

const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Client for the Example API.
///
/// Holds only immutable configuration and the injected transport, so calls
/// are independent of one another and a client can be shared freely.
/// Each operation is also available as a `build_*`/`parse_*` pair for hosts
/// that execute HTTP themselves.
#[derive(Debug, Clone)]
pub struct ExampleClient<T> {
    config: ClientConfig,
    transport: T,
}

impl<T> ExampleClient<T> {
    /// Create a client for the default production base URL.
    pub fn new(transport: T, api_key: impl Into<ApiKey>) -> Self {
        Self::from_config(transport, ClientConfig::new(api_key))
    }

    /// Create a client for a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `base_url` is not a valid absolute
    /// HTTP(S) URL.
    pub fn with_base_url(
        transport: T,
        api_key: impl Into<ApiKey>,
        base_url: &str,
    ) -> Result<Self> {
        let config = ClientConfig::with_base_url(api_key, base_url)?;
        Ok(Self::from_config(transport, config))
    }

    /// Create a client from a prepared configuration.
    pub fn from_config(transport: T, config: ClientConfig) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &BaseUrl {
        self.config.base_url()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for listing items.
    pub fn build_fetch_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url().endpoint(ITEMS),
            headers: vec![self.auth_header()],
            body: None,
        }
    }

    /// Decode the response to a list-items request.
    pub fn parse_fetch_items(&self, response: HttpResponse) -> Result<Vec<String>> {
        let body = self.take_body(response)?;
        decode_json::<ItemsResponse>(&body)
    }

    /// Build the request for submitting an item.
    pub fn build_submit_item(&self, item: &str) -> Result<HttpRequest> {
        let body = serde_json::to_vec(&SubmitItemRequest { item }).map_err(Error::Encode)?;

        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.base_url().endpoint(SUBMIT),
            headers: vec![
                self.auth_header(),
                (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
            ],
            body: Some(body),
        })
    }

    /// Decode the response to a submit request as UTF-8 text.
    pub fn parse_submit_item(&self, response: HttpResponse) -> Result<String> {
        let body = self.take_body(response)?;
        Ok(String::from_utf8(body)?)
    }

    fn auth_header(&self) -> (String, String) {
        (AUTHORIZATION.to_string(), self.config.api_key().bearer())
    }

    /// Apply the status policy and extract a non-empty body.
    fn take_body(&self, response: HttpResponse) -> Result<Vec<u8>> {
        trace!(status = response.status, "response received");

        if self.config.status_policy() == StatusPolicy::RequireSuccess && !response.is_success()
        {
            return Err(Error::Status {
                status: response.status,
                body: response
                    .body
                    .map(|b| String::from_utf8_lossy(&b).into_owned()),
            });
        }

        match response.body {
            Some(body) if !body.is_empty() => {
                trace!(len = body.len(), "response body");
                Ok(body)
            }
            _ => Err(Error::NoData),
        }
    }
}

impl<T: Transport> ExampleClient<T> {
    /// Fetch the list of items.
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn fetch_items(&self) -> Result<Vec<String>> {
        let request = self.build_fetch_items();
        debug!(url = %request.url, "fetching items");

        let response = self.transport.send(request).await?;

        self.parse_fetch_items(response)
    }

    /// Submit an item and return the server's text reply.
    #[instrument(skip(self, item), fields(base_url = %self.base_url(), item_len = item.len()))]
    pub async fn submit_item(&self, item: &str) -> Result<String> {
        let request = self.build_submit_item(item)?;
        debug!(url = %request.url, "submitting item");

        let response = self.transport.send(request).await?;

        self.parse_submit_item(response)
    }
}

fn decode_json<R: DeserializeOwned>(body: &[u8]) -> Result<R> {
    serde_json::from_slice(body).map_err(Error::Decode)
}
