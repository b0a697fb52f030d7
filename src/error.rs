use crate::codec::CodecError;
use crate::transport::TransportError;
use bytes::Bytes;
use thiserror::Error;

/// Structured error context for configuration and catalog failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error
    /// (e.g., "builder.base_url", "catalog.text-generation")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected content type, offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "model_catalog", "payload_codec")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for inference calls.
///
/// Every failure of a call surfaces as exactly one of these kinds; the only
/// failure the client recovers from on its own is the single model-loading retry.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid request URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Model '{model}' is currently loading")]
    ModelLoading { model: String },

    #[error("Rate limit reached for model '{model}'")]
    RateLimited { model: String },

    #[error("Request failed: HTTP {status}: {}", String::from_utf8_lossy(.body))]
    RequestFailed { status: u16, body: Bytes },

    #[error("Failed to decode response: {0}")]
    ParseFailure(#[source] CodecError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Model catalog error: {message}{}", format_context(.context))]
    Catalog {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new catalog error with structured context
    pub fn catalog_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Catalog {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub(crate) fn invalid_url(input: impl Into<String>, source: url::ParseError) -> Self {
        Error::InvalidUrl {
            input: input.into(),
            source,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Catalog { context, .. } | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status behind this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ModelLoading { .. } => Some(503),
            Error::RateLimited { .. } => Some(429),
            Error::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller may reasonably retry the same call later.
    ///
    /// The client itself never acts on this; it only performs the loading retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::ModelLoading { .. } | Error::RateLimited { .. } | Error::Transport(_) => true,
            Error::RequestFailed { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    /// Raw response body of a `RequestFailed`, decoded lossily as UTF-8.
    pub fn body_text(&self) -> Option<String> {
        match self {
            Error::RequestFailed { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }
}
