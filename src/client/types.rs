use crate::codec::{ContentType, RequestBody};
use crate::task::Task;

/// Per-call knobs understood by the inference API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// (Default: true) If a request gets a 503 while `wait_for_model` is false, resend it
    /// once with the same parameters and `wait_for_model` set to true.
    pub retry_on_error: bool,
    /// (Default: true) Let the server-side cache answer repeated requests. Disable for
    /// non-deterministic models to force a fresh inference.
    pub use_cache: bool,
    /// (Default: false) Ask the server to hold the request until the model is loaded
    /// instead of answering 503.
    pub wait_for_model: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            retry_on_error: true,
            use_cache: true,
            wait_for_model: false,
        }
    }
}

impl RequestOptions {
    pub fn with_retry_on_error(mut self, enable: bool) -> Self {
        self.retry_on_error = enable;
        self
    }

    pub fn with_use_cache(mut self, enable: bool) -> Self {
        self.use_cache = enable;
        self
    }

    pub fn with_wait_for_model(mut self, enable: bool) -> Self {
        self.wait_for_model = enable;
        self
    }
}

/// Everything the engine needs to run one logical inference call.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub task: Task,
    /// Model id or absolute URL; `None` means "use the catalog default for `task`".
    pub explicit_model: Option<String>,
    pub body: RequestBody,
    pub request_content_type: ContentType,
    pub response_content_type: ContentType,
    pub options: RequestOptions,
}

impl RequestSpec {
    /// JSON in, JSON out, default options.
    pub fn json(task: Task, body: RequestBody) -> Self {
        Self {
            task,
            explicit_model: None,
            body,
            request_content_type: ContentType::Json,
            response_content_type: ContentType::Json,
            options: RequestOptions::default(),
        }
    }

    /// Raw bytes in, JSON out, default options.
    pub fn binary(task: Task, bytes: impl Into<bytes::Bytes>) -> Self {
        Self {
            task,
            explicit_model: None,
            body: RequestBody::binary(bytes),
            request_content_type: ContentType::Binary,
            response_content_type: ContentType::Json,
            options: RequestOptions::default(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.explicit_model = Some(model.into());
        self
    }

    pub fn maybe_model(mut self, model: Option<&str>) -> Self {
        self.explicit_model = model.map(str::to_string);
        self
    }

    pub fn response_content_type(mut self, content_type: ContentType) -> Self {
        self.response_content_type = content_type;
        self
    }

    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }
}

/// Facts about one completed call.
#[derive(Debug, Clone)]
pub struct CallStats {
    pub task: Task,
    pub model: String,
    pub url: String,
    pub http_status: u16,
    /// Number of loading retries performed (0 or 1).
    pub retry_count: u32,
    pub duration_ms: u128,
    pub client_request_id: String,
}
