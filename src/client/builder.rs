use crate::catalog::{Catalog, ModelCatalog, DEFAULT_METADATA_URL};
use crate::client::core::InferenceClient;
use crate::client::endpoint::DEFAULT_BASE_URL;
use crate::client::types::RequestOptions;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, Result};
use std::sync::Arc;
use url::Url;

/// Builder for creating clients with custom configuration.
///
/// Unset values fall back to the environment, then to the public endpoints:
/// - `HF_TOKEN` / `HF_API_TOKEN`: access token
/// - `HF_INFERENCE_BASE_URL`: inference API root
/// - `HF_METADATA_URL`: task catalog endpoint
pub struct InferenceClientBuilder {
    access_token: Option<String>,
    base_url: Option<String>,
    metadata_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    catalog: Option<Catalog>,
    default_options: RequestOptions,
}

impl InferenceClientBuilder {
    pub fn new() -> Self {
        Self {
            access_token: None,
            base_url: None,
            metadata_url: None,
            transport: None,
            catalog: None,
            default_options: RequestOptions::default(),
        }
    }

    /// Set the access token. An empty token disables the `Authorization` header
    /// and skips the environment lookup.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Override the inference API root (primarily for testing with mock servers).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the task catalog endpoint.
    pub fn metadata_url(mut self, url: impl Into<String>) -> Self {
        self.metadata_url = Some(url.into());
        self
    }

    /// Inject a custom transport. Default is [`HttpTransport::from_env`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Seed the model catalog so default models resolve without a metadata fetch.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn default_options(mut self, options: RequestOptions) -> Self {
        self.default_options = options;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<InferenceClient> {
        let access_token = self
            .access_token
            .or_else(|| std::env::var("HF_TOKEN").ok())
            .or_else(|| std::env::var("HF_API_TOKEN").ok())
            .filter(|t| !t.is_empty());

        let base_url = parse_url(
            self.base_url
                .or_else(|| std::env::var("HF_INFERENCE_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        )?;
        let metadata_url = parse_url(
            self.metadata_url
                .or_else(|| std::env::var("HF_METADATA_URL").ok())
                .unwrap_or_else(|| DEFAULT_METADATA_URL.to_string()),
        )?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::from_env()?),
        };

        let mut catalog = ModelCatalog::new(Arc::clone(&transport), metadata_url);
        if let Some(seed) = self.catalog {
            catalog = catalog.with_catalog(seed);
        }

        Ok(InferenceClient {
            transport,
            catalog: Arc::new(catalog),
            access_token,
            base_url,
            default_options: self.default_options,
        })
    }
}

impl Default for InferenceClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_url(raw: String) -> Result<Url> {
    Url::parse(&raw).map_err(|e| Error::invalid_url(raw, e))
}
