//! Mock HTTP server setup for transport-level tests

use hf_inference::transport::HttpTransport;
use hf_inference::InferenceClient;
use mockito::{Mock, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn metadata_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    /// Client wired to the mock server through the real reqwest transport.
    pub fn create_test_client(&self, token: &str) -> hf_inference::Result<InferenceClient> {
        let transport = HttpTransport::new(Duration::from_secs(5), None)?;
        InferenceClient::builder()
            .access_token(token)
            .base_url(&self.base_url)
            .metadata_url(self.metadata_url())
            .transport(Arc::new(transport))
            .build()
    }

    /// Serve the task catalog, expected to be fetched `hits` times.
    pub async fn mock_catalog(&mut self, body: &str, hits: usize) -> Mock {
        self.server
            .mock("GET", "/api/tasks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    /// Answer inference calls on `path` whose `x-wait-for-model` header equals `wait`.
    pub async fn mock_inference(
        &mut self,
        path: &str,
        wait: &str,
        status: usize,
        body: &[u8],
        hits: usize,
    ) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("x-wait-for-model", wait)
            .with_status(status)
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }
}
