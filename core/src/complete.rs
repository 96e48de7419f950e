//! Classification of completed exchanges.
//!
//! A status of exactly 200 triggers one JSON decode attempt; any other
//! status fails with that status and the body is never inspected. Nothing
//! here logs or retries: the outcome is returned to the caller untouched.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::http::HttpResponse;

const STATUS_OK: u16 = 200;

/// Classify a completed exchange into a parsed JSON value or a failure.
pub fn complete(status: u16, raw_body: Option<&str>) -> Result<Value, ExchangeError> {
    complete_as(status, raw_body)
}

/// Like `complete`, decoding straight into `T`.
pub fn complete_as<T: DeserializeOwned>(
    status: u16,
    raw_body: Option<&str>,
) -> Result<T, ExchangeError> {
    if status != STATUS_OK {
        return Err(ExchangeError::Status(status));
    }
    // An absent body parses like an empty one, which always fails.
    serde_json::from_str(raw_body.unwrap_or_default()).map_err(ExchangeError::Decode)
}

/// Complete `response` and hand the outcome to exactly one continuation.
pub fn complete_with<S, F>(response: HttpResponse, on_success: S, on_failure: F)
where
    S: FnOnce(Value),
    F: FnOnce(ExchangeError),
{
    match complete(response.status, response.body.as_deref()) {
        Ok(value) => on_success(value),
        Err(err) => on_failure(err),
    }
}
