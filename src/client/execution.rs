//! Request execution: resolve, build, send, classify, and the model-loading retry.

use crate::client::endpoint::ResolvedTarget;
use crate::client::error_classification::{classify_status, status_error, StatusClass};
use crate::client::policy::{self, Decision, MAX_ATTEMPTS};
use crate::client::request::build_inference_request;
use crate::client::types::{CallStats, RequestSpec};
use crate::codec::{self, ContentType};
use crate::task::Task;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::core::InferenceClient;

impl InferenceClient {
    /// Run one inference call and decode the result as `T`.
    ///
    /// `T` must match the declared response content type: any `Deserialize` type for
    /// JSON responses, `bytes::Bytes` for binary ones.
    pub async fn execute<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        self.execute_with_stats(spec).await.map(|(out, _)| out)
    }

    /// Like [`execute`](Self::execute), also returning facts about the call.
    pub async fn execute_with_stats<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
    ) -> Result<(T, CallStats)> {
        let RequestSpec {
            task,
            explicit_model,
            body,
            request_content_type,
            response_content_type,
            options,
        } = spec;
        let client_request_id = Uuid::new_v4().to_string();

        // Resolved once; the loading retry reuses the same target and payload.
        let model_id = self.catalog.resolve(task, explicit_model.as_deref()).await?;
        let target = ResolvedTarget::derive(model_id, &self.base_url)?;
        let payload = codec::encode(&body, request_content_type)?;

        if request_content_type == ContentType::Json {
            debug!(
                task = task.as_str(),
                body = %String::from_utf8_lossy(&payload),
                "encoded request body"
            );
        } else {
            debug!(task = task.as_str(), bytes = payload.len(), "binary request body");
        }

        let start = Instant::now();
        let mut attempt_options = options;

        for attempt in 0..MAX_ATTEMPTS {
            let request = build_inference_request(
                &target,
                &attempt_options,
                &payload,
                request_content_type,
                self.access_token.as_deref(),
            )?;

            let resp = self.transport.send(request).await.map_err(|e| {
                info!(
                    task = task.as_str(),
                    model = target.model_id.as_str(),
                    client_request_id = client_request_id.as_str(),
                    error = %e,
                    "inference transport failed"
                );
                Error::Transport(e)
            })?;
            let status = resp.status;

            match classify_status(status) {
                StatusClass::Success => {
                    let out = match codec::decode::<T>(&resp.body, response_content_type) {
                        Ok(out) => out,
                        Err(e) => {
                            log_failure(task, &target, status, &client_request_id, start);
                            return Err(Error::ParseFailure(e));
                        }
                    };
                    let stats = CallStats {
                        task,
                        model: target.model_id.clone(),
                        url: target.url.to_string(),
                        http_status: status,
                        retry_count: attempt,
                        duration_ms: start.elapsed().as_millis(),
                        client_request_id,
                    };
                    info!(
                        http_status = status,
                        task = task.as_str(),
                        model = stats.model.as_str(),
                        retry_count = attempt,
                        duration_ms = stats.duration_ms,
                        client_request_id = stats.client_request_id.as_str(),
                        "inference request completed"
                    );
                    return Ok((out, stats));
                }
                StatusClass::ModelLoading => {
                    match policy::on_model_loading(attempt_options, attempt) {
                        Decision::Retry(next) => {
                            warn!(
                                task = task.as_str(),
                                model = target.model_id.as_str(),
                                client_request_id = client_request_id.as_str(),
                                "model is loading, resending with x-wait-for-model"
                            );
                            attempt_options = next;
                        }
                        Decision::Fail => {
                            log_failure(task, &target, status, &client_request_id, start);
                            return Err(status_error(
                                StatusClass::ModelLoading,
                                status,
                                resp.body,
                                &target.model_id,
                            ));
                        }
                    }
                }
                class => {
                    log_failure(task, &target, status, &client_request_id, start);
                    return Err(status_error(class, status, resp.body, &target.model_id));
                }
            }
        }

        // Every path of the final attempt returns; reaching here means the
        // attempts ran out while the model was still loading.
        Err(Error::ModelLoading {
            model: target.model_id,
        })
    }
}

fn log_failure(
    task: Task,
    target: &ResolvedTarget,
    status: u16,
    client_request_id: &str,
    start: Instant,
) {
    info!(
        http_status = status,
        task = task.as_str(),
        model = target.model_id.as_str(),
        client_request_id,
        duration_ms = start.elapsed().as_millis(),
        "inference request failed"
    );
}
