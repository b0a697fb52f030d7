use crate::client::types::RequestOptions;

/// Internal decision for how to proceed after a model-loading response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    /// Resend once with these options.
    Retry(RequestOptions),
    Fail,
}

/// Upper bound of send attempts per logical call: the first try plus one loading retry.
pub(crate) const MAX_ATTEMPTS: u32 = 2;

/// Decide what to do after an attempt sent with `attempt_options` answered 503.
///
/// A retry is only allowed when the caller opted in and the server was not already
/// asked to wait; the retried attempt always waits, so a second 503 fails.
pub(crate) fn on_model_loading(attempt_options: RequestOptions, attempt: u32) -> Decision {
    if attempt + 1 >= MAX_ATTEMPTS {
        return Decision::Fail;
    }
    if attempt_options.retry_on_error && !attempt_options.wait_for_model {
        Decision::Retry(attempt_options.with_wait_for_model(true))
    } else {
        Decision::Fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_loading_response_retries_with_wait() {
        let decision = on_model_loading(RequestOptions::default(), 0);
        match decision {
            Decision::Retry(opts) => {
                assert!(opts.wait_for_model);
                assert!(opts.use_cache);
            }
            Decision::Fail => panic!("expected a retry"),
        }
    }

    #[test]
    fn test_no_retry_when_disabled() {
        let opts = RequestOptions::default().with_retry_on_error(false);
        assert_eq!(on_model_loading(opts, 0), Decision::Fail);
    }

    #[test]
    fn test_no_retry_when_already_waiting() {
        let opts = RequestOptions::default().with_wait_for_model(true);
        assert_eq!(on_model_loading(opts, 0), Decision::Fail);
    }

    #[test]
    fn test_second_attempt_never_retries() {
        assert_eq!(on_model_loading(RequestOptions::default(), 1), Decision::Fail);
    }
}
