//! Error type shared by every stage of an exchange.
//!
//! # Design
//! `Status` and `Decode` are the only outcomes the completer can produce.
//! `Serialization` belongs to request building and `Network` to transports,
//! which fail before any status code exists.

use thiserror::Error;

/// Errors surfaced by request building, transports and completion.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The exchange finished with a status other than 200.
    #[error("request failed with HTTP status {0}")]
    Status(u16),

    /// Status was 200 but the body is not valid JSON (or is missing).
    #[error("response body is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded as JSON.
    #[error("request payload could not be encoded: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The transport failed before a response arrived.
    #[error("transport error: {0}")]
    Network(String),
}

impl ExchangeError {
    /// The HTTP status carried by a `Status` failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ExchangeError::Status(status) => Some(*status),
            _ => None,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ExchangeError::Decode(_))
    }
}
