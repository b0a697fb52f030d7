//! Task → default model catalog.
//!
//! When a call names no model, the client asks the hub's task metadata endpoint
//! which models serve each task and targets the first one listed. The catalog is
//! fetched lazily on first need, kept as an immutable snapshot behind an
//! [`ArcSwapOption`], and never refreshed for the lifetime of the client.

use crate::client::error_classification::{classify_status, status_error, StatusClass};
use crate::client::request::build_metadata_request;
use crate::codec::{self, ContentType};
use crate::task::Task;
use crate::transport::Transport;
use crate::{Error, ErrorContext, Result};
use arc_swap::ArcSwapOption;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

/// Hub endpoint listing every task with its recommended models.
pub const DEFAULT_METADATA_URL: &str = "https://huggingface.co/api/tasks";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    pub id: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    /// Recommended models, in the order the hub lists them.
    #[serde(default)]
    pub models: Vec<ModelRef>,
}

/// Snapshot of the task metadata, keyed by [`Task`].
///
/// Task names the client does not know are dropped when decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<Task, CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = (Task, CatalogEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, task: Task) -> Option<&CatalogEntry> {
        self.entries.get(&task)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First model listed for `task`.
    pub fn default_model(&self, task: Task) -> Result<&str> {
        let entry = self.get(task).ok_or_else(|| {
            Error::catalog_with_context(
                format!("task '{}' is not listed in the model catalog", task),
                ErrorContext::new()
                    .with_field_path(format!("catalog.{}", task))
                    .with_source("model_catalog"),
            )
        })?;
        entry.models.first().map(|m| m.id.as_str()).ok_or_else(|| {
            Error::catalog_with_context(
                format!("no models listed for task '{}'", task),
                ErrorContext::new()
                    .with_field_path(format!("catalog.{}.models", task))
                    .with_source("model_catalog"),
            )
        })
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: HashMap<String, serde_json::Value> = HashMap::deserialize(deserializer)?;
        let mut entries = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            let Ok(task) = name.parse::<Task>() else {
                continue;
            };
            let entry = CatalogEntry::deserialize(value)
                .map_err(|e| D::Error::custom(format!("catalog entry '{}': {}", name, e)))?;
            entries.insert(task, entry);
        }
        Ok(Self { entries })
    }
}

/// Lazily populated, shared catalog cache plus the fetch logic behind it.
pub struct ModelCatalog {
    metadata_url: Url,
    transport: Arc<dyn Transport>,
    cache: ArcSwapOption<Catalog>,
    // single-flight guard for the first fetch
    fetch_lock: Mutex<()>,
}

impl ModelCatalog {
    pub fn new(transport: Arc<dyn Transport>, metadata_url: Url) -> Self {
        Self {
            metadata_url,
            transport,
            cache: ArcSwapOption::empty(),
            fetch_lock: Mutex::new(()),
        }
    }

    /// Start with an already known catalog; no fetch will ever happen.
    pub fn with_catalog(self, catalog: Catalog) -> Self {
        self.cache.store(Some(Arc::new(catalog)));
        self
    }

    /// Model to target for `task`.
    ///
    /// An explicit model wins without touching the cache or the network.
    pub async fn resolve(&self, task: Task, explicit_model: Option<&str>) -> Result<String> {
        if let Some(model) = explicit_model {
            return Ok(model.to_string());
        }
        let catalog = self.load().await?;
        let model = catalog.default_model(task)?;
        debug!(task = task.as_str(), model, "resolved default model from catalog");
        Ok(model.to_string())
    }

    /// Cached catalog, fetching it first if needed.
    ///
    /// A failed fetch leaves the cache empty so the next call tries again.
    pub async fn load(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.cache.load_full() {
            return Ok(catalog);
        }

        let _guard = self.fetch_lock.lock().await;
        // another caller may have filled the cache while we waited
        if let Some(catalog) = self.cache.load_full() {
            return Ok(catalog);
        }

        let catalog = Arc::new(self.fetch().await?);
        self.cache.store(Some(Arc::clone(&catalog)));
        Ok(catalog)
    }

    pub fn snapshot(&self) -> Option<Arc<Catalog>> {
        self.cache.load_full()
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.load().is_some()
    }

    async fn fetch(&self) -> Result<Catalog> {
        debug!(url = self.metadata_url.as_str(), "fetching model catalog");
        let resp = self
            .transport
            .send(build_metadata_request(&self.metadata_url))
            .await?;

        match classify_status(resp.status) {
            StatusClass::Success => {
                let catalog: Catalog =
                    codec::decode(&resp.body, ContentType::Json).map_err(Error::ParseFailure)?;
                debug!(tasks = catalog.len(), "model catalog cached");
                Ok(catalog)
            }
            // a 503 here means the hub is unavailable, not that a model is loading
            StatusClass::ModelLoading => Err(Error::RequestFailed {
                status: resp.status,
                body: resp.body,
            }),
            class => Err(status_error(class, resp.status, resp.body, "task catalog")),
        }
    }
}
