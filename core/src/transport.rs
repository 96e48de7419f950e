//! Executing requests over the network.
//!
//! # Design
//! `Transport` is the seam between the pure core and real I/O. Non-200
//! statuses are data, not errors: a transport only fails when no response
//! arrived at all, and leaves classification to the completer. Once a status
//! is known it is always returned, even if the body could not be read.

use tracing::{debug, warn};

use crate::error::ExchangeError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Largest response body `UreqTransport` will buffer.
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Performs one HTTP exchange.
pub trait Transport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wrap an existing agent. It should be configured with
    /// `http_status_as_error(false)`, otherwise non-2xx responses surface as
    /// `Network` errors instead of status failures.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ExchangeError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let result = match request.method {
            HttpMethod::Get => {
                let mut builder = self.agent.get(&request.url);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = self.agent.post(&request.url);
                for (key, value) in &request.headers {
                    builder = builder.header(key.as_str(), value.as_str());
                }
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed");
            ExchangeError::Network(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(key, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (key.as_str().to_string(), value.to_string()))
            })
            .collect();
        // Non-UTF-8 bytes are replaced; an unreadable body is left absent.
        let body = match response
            .body_mut()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
        {
            Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => {
                warn!(status, error = %e, "response body unreadable");
                None
            }
        };

        debug!(status, bytes = body.as_ref().map_or(0, String::len), "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
