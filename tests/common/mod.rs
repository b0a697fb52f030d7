//! Shared test fixtures.
#![allow(dead_code)]

pub mod mock_server;

use async_trait::async_trait;
use bytes::Bytes;
use hf_inference::transport::{PreparedRequest, Transport, TransportError, TransportResponse};
use hf_inference::InferenceClient;
use reqwest::Method;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const METADATA_URL: &str = "https://hub.test/api/tasks";
pub const BASE_URL: &str = "https://inference.test";

/// Catalog JSON covering the tasks used across the tests.
pub fn catalog_json() -> String {
    serde_json::json!({
        "fill-mask": {
            "id": "fill-mask",
            "models": [
                {"id": "distilroberta-base", "description": "A faster and lighter version of BERT."},
                {"id": "bert-base-uncased", "description": "The famous BERT model."}
            ]
        },
        "text-generation": {
            "id": "text-generation",
            "models": [{"id": "bigcode/starcoder", "description": "Code generation."}]
        },
        "text-to-speech": {
            "id": "text-to-speech",
            "models": [{"id": "microsoft/speecht5_tts", "description": "TTS."}]
        },
        "summarization": {"id": "summarization", "models": []}
    })
    .to_string()
}

/// Transport that replays canned responses and records every request it sees.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<TransportResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Shorthand for a script of plain `(status, text body)` responses.
    pub fn replies(replies: Vec<(u16, &str)>) -> Arc<Self> {
        Self::new(
            replies
                .into_iter()
                .map(|(status, body)| {
                    Ok(TransportResponse::new(status, Bytes::from(body.to_string())))
                })
                .collect(),
        )
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn metadata_fetches(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == Method::GET && r.url.as_str() == METADATA_URL)
            .count()
    }

    pub fn inference_calls(&self) -> Vec<PreparedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == Method::POST)
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("script exhausted".to_string())))
    }
}

pub fn client_with(transport: Arc<ScriptedTransport>) -> InferenceClient {
    InferenceClient::builder()
        .access_token("hf_test_token")
        .base_url(BASE_URL)
        .metadata_url(METADATA_URL)
        .transport(transport)
        .build()
        .expect("client")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn task_url(model: &str) -> String {
    format!("{}/models/{}", BASE_URL, model)
}

