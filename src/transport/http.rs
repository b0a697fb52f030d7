use super::{PreparedRequest, Transport, TransportError, TransportResponse};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from environment knobs.
    ///
    /// - `HF_HTTP_TIMEOUT_SECS` (default 120): per-request timeout. Requests sent with
    ///   `X-Wait-For-Model: true` block server-side until the model is up, so keep this generous.
    /// - `HF_PROXY_URL`: route all traffic through a proxy.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = env::var("HF_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let proxy = env::var("HF_PROXY_URL").ok();
        Self::new(Duration::from_secs(timeout_secs), proxy.as_deref())
    }

    pub fn new(timeout: Duration, proxy_url: Option<&str>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(timeout);

        if let Some(proxy_url) = proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("HF_PROXY_URL")
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: PreparedRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        // reqwest keeps no response cache, so `bypass_local_cache` needs no handling here.
        let resp = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
