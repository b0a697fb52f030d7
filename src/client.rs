//! Inference client and its request execution pipeline.
//!
//! Keep the public surface small and predictable; implementation details are
//! split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod endpoint;
pub(crate) mod error_classification;
mod execution;
mod policy;
pub(crate) mod request;
pub mod types;

pub use builder::InferenceClientBuilder;
pub use self::core::InferenceClient;
pub use endpoint::{ResolvedTarget, DEFAULT_BASE_URL};
pub use request::{USE_CACHE_HEADER, WAIT_FOR_MODEL_HEADER};
pub use types::{CallStats, RequestOptions, RequestSpec};
