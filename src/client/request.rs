//! Request assembly: target + options + encoded body -> [`PreparedRequest`].

use crate::client::endpoint::ResolvedTarget;
use crate::client::types::RequestOptions;
use crate::codec::ContentType;
use crate::transport::PreparedRequest;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use url::Url;

pub const USE_CACHE_HEADER: &str = "x-use-cache";
pub const WAIT_FOR_MODEL_HEADER: &str = "x-wait-for-model";

fn flag(enabled: bool) -> HeaderValue {
    HeaderValue::from_static(if enabled { "true" } else { "false" })
}

fn bearer(token: Option<&str>) -> Result<Option<HeaderValue>> {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        Error::configuration_with_context(
            "Access token contains characters not allowed in an HTTP header",
            ErrorContext::new()
                .with_field_path("access_token")
                .with_source("request_builder"),
        )
    })?;
    value.set_sensitive(true);
    Ok(Some(value))
}

/// Assemble the `POST` for one inference attempt.
pub(crate) fn build_inference_request(
    target: &ResolvedTarget,
    options: &RequestOptions,
    body: &Bytes,
    request_content_type: ContentType,
    access_token: Option<&str>,
) -> Result<PreparedRequest> {
    let mut headers = HeaderMap::new();
    if let Some(auth) = bearer(access_token)? {
        headers.insert(AUTHORIZATION, auth);
    }
    if request_content_type == ContentType::Json {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    headers.insert(USE_CACHE_HEADER, flag(options.use_cache));
    headers.insert(WAIT_FOR_MODEL_HEADER, flag(options.wait_for_model));

    Ok(PreparedRequest {
        method: Method::POST,
        url: target.url.clone(),
        headers,
        body: body.clone(),
        bypass_local_cache: true,
    })
}

/// Assemble the `GET` for the task catalog.
pub(crate) fn build_metadata_request(url: &Url) -> PreparedRequest {
    PreparedRequest {
        method: Method::GET,
        url: url.clone(),
        headers: HeaderMap::new(),
        body: Bytes::new(),
        bypass_local_cache: false,
    }
}
