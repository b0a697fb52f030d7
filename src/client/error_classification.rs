//! Error classification logic

use crate::Error;
use bytes::Bytes;

/// What an HTTP status means for an inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusClass {
    Success,
    /// 503: the model is still being loaded on the server.
    ModelLoading,
    /// 429
    RateLimited,
    Failed,
}

/// Classify an HTTP status following the inference API contract.
pub(crate) fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        503 => StatusClass::ModelLoading,
        429 => StatusClass::RateLimited,
        _ => StatusClass::Failed,
    }
}

/// Turn a non-success classification into the matching error kind.
///
/// `model` names what was being called, for diagnostics only.
pub(crate) fn status_error(class: StatusClass, status: u16, body: Bytes, model: &str) -> Error {
    match class {
        StatusClass::ModelLoading => Error::ModelLoading {
            model: model.to_string(),
        },
        StatusClass::RateLimited => Error::RateLimited {
            model: model.to_string(),
        },
        StatusClass::Success | StatusClass::Failed => Error::RequestFailed { status, body },
    }
}
