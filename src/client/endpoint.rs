//! Target URL derivation for inference calls.

use crate::{Error, Result};
use url::Url;

/// Hosted inference API root.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// The model a call targets and the URL it is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub model_id: String,
    pub url: Url,
}

impl ResolvedTarget {
    /// Derive the request URL for `model_id`.
    ///
    /// A model id that is itself an absolute URL (starting with `http:`, `https:`
    /// or `/`) is used verbatim; anything else becomes `<base_url>/models/<model_id>`.
    /// An `http(s)` override that does not parse is rejected rather than being
    /// treated as a model name. Leading slashes of a path-like id are dropped so
    /// `/org/name` targets the same URL as `org/name`.
    pub fn derive(model_id: impl Into<String>, base_url: &Url) -> Result<Self> {
        let model_id = model_id.into();

        if looks_like_url(&model_id) {
            match Url::parse(&model_id) {
                Ok(url) => return Ok(Self { model_id, url }),
                Err(e) if model_id.starts_with("http") => {
                    return Err(Error::invalid_url(model_id, e));
                }
                // relative path: not an absolute URL, falls through to the models path
                Err(_) => {}
            }
        }

        let raw = format!(
            "{}/models/{}",
            base_url.as_str().trim_end_matches('/'),
            model_id.trim_start_matches('/')
        );
        let url = Url::parse(&raw).map_err(|e| Error::invalid_url(raw.clone(), e))?;
        Ok(Self { model_id, url })
    }
}

fn looks_like_url(model: &str) -> bool {
    model.starts_with('/') || model.starts_with("http:") || model.starts_with("https:")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_model_id_under_models_path() {
        let target = ResolvedTarget::derive("org/name", &base()).unwrap();
        assert_eq!(
            target.url.as_str(),
            "https://api-inference.huggingface.co/models/org/name"
        );
        assert_eq!(target.model_id, "org/name");
    }

    #[test]
    fn test_absolute_url_used_verbatim() {
        let target = ResolvedTarget::derive("https://custom.host/x", &base()).unwrap();
        assert_eq!(target.url.as_str(), "https://custom.host/x");

        let target = ResolvedTarget::derive("http://localhost:8080/generate", &base()).unwrap();
        assert_eq!(target.url.as_str(), "http://localhost:8080/generate");
    }

    #[test]
    fn test_custom_base_with_trailing_slash() {
        let base = Url::parse("http://127.0.0.1:9000/").unwrap();
        let target = ResolvedTarget::derive("gpt2", &base).unwrap();
        assert_eq!(target.url.as_str(), "http://127.0.0.1:9000/models/gpt2");
    }

    #[test]
    fn test_leading_slash_without_host_goes_under_models() {
        let target = ResolvedTarget::derive("/local/model", &base()).unwrap();
        assert_eq!(
            target.url.as_str(),
            "https://api-inference.huggingface.co/models/local/model"
        );
        assert_eq!(target.model_id, "/local/model");

        let target = ResolvedTarget::derive("//org/name", &base()).unwrap();
        assert_eq!(
            target.url.as_str(),
            "https://api-inference.huggingface.co/models/org/name"
        );
    }

    #[test]
    fn test_unparseable_target_is_invalid_url() {
        let err = ResolvedTarget::derive("https://[::1", &base()).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
