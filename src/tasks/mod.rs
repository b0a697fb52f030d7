//! Typed helpers for common inference tasks.
//!
//! Each helper only shapes the payload; resolution, headers, the loading retry and
//! decoding all go through [`InferenceClient::execute`](crate::InferenceClient::execute).
//! Tasks without a helper can be called the same way with a hand-built
//! [`RequestSpec`](crate::client::RequestSpec).

mod client;
mod types;

pub use types::{
    ClassificationOutput, FillMaskOutput, SpeechRecognitionOutput, SummarizationOutput,
    SummarizationParameters, TextGenerationOutput, TextGenerationParameters,
};
