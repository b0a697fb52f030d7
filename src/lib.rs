//! # hf-inference
//!
//! Async client for the Hugging Face hosted inference API.
//!
//! ## Overview
//!
//! The API serves dozens of tasks (classification, generation, translation,
//! speech, vision, ...) from `POST /models/<model-id>`, taking JSON or raw bytes and
//! answering with JSON or raw bytes. This crate implements the part every task
//! shares: the request execution pipeline.
//!
//! - **Model resolution**: calls that name no model target the first model the hub
//!   lists for the task. The task catalog is fetched once per client and cached.
//! - **Request building**: auth, `X-Use-Cache` and `X-Wait-For-Model` headers, body
//!   encoding driven by the declared content types.
//! - **Execution**: classify the response status, decode, and apply the API's
//!   model-loading contract: a 503 is resent once with `X-Wait-For-Model: true`.
//! - **Pluggable transport**: [`transport::Transport`] lets applications supply
//!   their own HTTP stack; [`transport::HttpTransport`] is the reqwest default.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hf_inference::InferenceClient;
//!
//! #[tokio::main]
//! async fn main() -> hf_inference::Result<()> {
//!     let client = InferenceClient::builder()
//!         .access_token("hf_...")
//!         .build()?;
//!
//!     let out = client
//!         .text_generation("The answer to the universe is", None, Some("gpt2"), None)
//!         .await?;
//!     println!("{}", out[0].generated_text);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, request building and execution |
//! | [`catalog`] | Task → default model catalog and its cache |
//! | [`codec`] | Request/response payload encoding |
//! | [`transport`] | Transport trait and the reqwest implementation |
//! | [`task`] | Task identifiers |
//! | [`tasks`] | Typed helpers for common tasks |

pub mod catalog;
pub mod client;
pub mod codec;
pub mod task;
pub mod tasks;
pub mod transport;

// Re-export main types for convenience
pub use catalog::{Catalog, CatalogEntry, ModelCatalog, ModelRef};
pub use client::{
    CallStats, InferenceClient, InferenceClientBuilder, RequestOptions, RequestSpec,
    ResolvedTarget,
};
pub use codec::{ContentType, RequestBody};
pub use task::Task;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
