//! Request construction.
//!
//! Every request carries `content-type: application/json`, GET included.
//! Only POST requests with truthy data get a body: `null`, `false`, `0` and
//! `""` send none. The URL is used as given.

use serde::Serialize;
use serde_json::Value;

use crate::config::RequestConfig;
use crate::error::ExchangeError;
use crate::http::{HttpMethod, HttpRequest};

pub const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

/// Build a request for `method` and `url` from `config`.
pub fn build_request(
    method: HttpMethod,
    url: &str,
    config: &RequestConfig,
) -> Result<HttpRequest, ExchangeError> {
    let body = match (method, &config.data) {
        (HttpMethod::Post, Some(data)) if is_truthy(data) => {
            Some(serde_json::to_string(data).map_err(ExchangeError::Serialization)?)
        }
        _ => None,
    };
    Ok(HttpRequest {
        method,
        url: url.to_string(),
        headers: vec![(CONTENT_TYPE_JSON.0.to_string(), CONTENT_TYPE_JSON.1.to_string())],
        body,
    })
}

/// Build a GET request; it never carries a body.
pub fn get(url: &str) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url: url.to_string(),
        headers: vec![(CONTENT_TYPE_JSON.0.to_string(), CONTENT_TYPE_JSON.1.to_string())],
        body: None,
    }
}

/// Build a POST request whose body is `data` encoded as JSON.
pub fn post<T: Serialize + ?Sized>(url: &str, data: &T) -> Result<HttpRequest, ExchangeError> {
    let body = serde_json::to_string(data).map_err(ExchangeError::Serialization)?;
    Ok(HttpRequest {
        method: HttpMethod::Post,
        url: url.to_string(),
        headers: vec![(CONTENT_TYPE_JSON.0.to_string(), CONTENT_TYPE_JSON.1.to_string())],
        body: Some(body),
    })
}

fn is_truthy(data: &Value) -> bool {
    match data {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
