//! JSON-over-HTTP exchange core.
//!
//! # Overview
//! Builds `HttpRequest` values, executes them through a `Transport`, and
//! completes the resulting `HttpResponse` into a JSON value or an
//! `ExchangeError`. The completer is pure: hosts that do their own I/O can
//! call `complete` directly with a status code and body.
//!
//! # Design
//! - Completion yields a single `Result`; `complete_with` adapts it to a
//!   success/failure continuation pair for callers that want one.
//! - `RequestConfig` carries the optional request settings with defaults.
//! - `UreqTransport` is the stock blocking transport; `Exchange::dispatch`
//!   moves work to a thread when the config is not blocking.

pub mod complete;
pub mod config;
pub mod error;
pub mod exchange;
pub mod http;
pub mod request;
pub mod transport;

pub use complete::{complete, complete_as, complete_with};
pub use config::RequestConfig;
pub use error::ExchangeError;
pub use exchange::{Exchange, Pending};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{build_request, get, post};
pub use transport::{Transport, UreqTransport};
