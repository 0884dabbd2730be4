//! Outbound transport seam.
//!
//! Adapters never talk to `reqwest` directly; they hand an `UpstreamRequest`
//! to a `Transport`, which lets tests swap in an instrumented mock.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::error::Result;
use crate::models::{HttpConfig, Provider};
use crate::utils::http::create_async_client;

/// One outbound GET against a provider.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub provider: Provider,
    pub url: Url,
    pub bearer_token: String,
    pub headers: Vec<(&'static str, String)>,
}

/// Raw upstream answer. Non-2xx statuses are not errors at this level.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

/// Performs outbound requests for the adapters.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &UpstreamRequest) -> Result<UpstreamResponse>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a transport with a client configured from `config`.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn prepare(&self, request: &UpstreamRequest) -> RequestBuilder {
        let mut builder = self
            .client
            .get(request.url.clone())
            .bearer_auth(&request.bearer_token)
            .header(ACCEPT, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        builder
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: &UpstreamRequest) -> Result<UpstreamResponse> {
        let response = self.prepare(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{} {} -> {}", request.provider, request.url, status);
        Ok(UpstreamResponse { status, body })
    }
}
