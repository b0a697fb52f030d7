use crate::catalog::ModelCatalog;
use crate::client::types::RequestOptions;
use crate::transport::Transport;
use crate::Result;
use std::sync::Arc;
use url::Url;

/// Client for the hosted inference API.
///
/// Cheap to clone; clones share the transport and the model catalog cache.
#[derive(Clone)]
pub struct InferenceClient {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) catalog: Arc<ModelCatalog>,
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: Url,
    pub(crate) default_options: RequestOptions,
}

impl InferenceClient {
    /// Create a client configured from the environment (`HF_TOKEN`, `HF_INFERENCE_BASE_URL`, ...).
    pub fn new() -> Result<Self> {
        crate::client::builder::InferenceClientBuilder::new().build()
    }

    pub fn builder() -> crate::client::builder::InferenceClientBuilder {
        crate::client::builder::InferenceClientBuilder::new()
    }

    /// The shared task → model catalog.
    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Options used by the task helpers when a call passes none.
    pub fn default_options(&self) -> RequestOptions {
        self.default_options
    }

    pub(crate) fn options_or_default(&self, options: Option<RequestOptions>) -> RequestOptions {
        options.unwrap_or(self.default_options)
    }
}

impl std::fmt::Debug for InferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InferenceClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_token", &self.access_token.is_some())
            .field("catalog_loaded", &self.catalog.is_loaded())
            .field("default_options", &self.default_options)
            .finish()
    }
}
