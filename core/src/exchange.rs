//! One request/response cycle, run inline or on a worker thread.
//!
//! # Design
//! An `Exchange` owns its request and is consumed when sent, so it runs at
//! most once. The continuation passed to `dispatch` is `FnOnce` and is moved
//! to whichever thread completes the exchange, so it fires exactly once.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use serde_json::Value;

use crate::complete::complete;
use crate::config::RequestConfig;
use crate::error::ExchangeError;
use crate::http::{HttpMethod, HttpRequest};
use crate::request::build_request;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct Exchange {
    request: HttpRequest,
    blocking: bool,
}

impl Exchange {
    /// Build the request for `method` and `url` and remember whether the
    /// config asked for a blocking exchange.
    pub fn new(
        method: HttpMethod,
        url: &str,
        config: &RequestConfig,
    ) -> Result<Self, ExchangeError> {
        Ok(Self {
            request: build_request(method, url, config)?,
            blocking: config.blocking,
        })
    }

    pub fn from_request(request: HttpRequest, blocking: bool) -> Self {
        Self { request, blocking }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// Execute on the calling thread and complete the response.
    pub fn send<T: Transport + ?Sized>(self, transport: &T) -> Result<Value, ExchangeError> {
        let response = transport.execute(self.request)?;
        complete(response.status, response.body.as_deref())
    }

    /// Execute and deliver the outcome to `on_done`.
    ///
    /// Blocking exchanges invoke `on_done` before returning; the others run
    /// on a new thread whose handle is kept in the returned `Pending`.
    pub fn dispatch<T, F>(self, transport: Arc<T>, on_done: F) -> Pending
    where
        T: Transport + ?Sized + 'static,
        F: FnOnce(Result<Value, ExchangeError>) + Send + 'static,
    {
        if self.blocking {
            on_done(self.send(&*transport));
            return Pending { handle: None };
        }
        let handle = thread::spawn(move || on_done(self.send(&*transport)));
        Pending {
            handle: Some(handle),
        }
    }
}

/// Handle to a dispatched exchange.
#[derive(Debug)]
pub struct Pending {
    handle: Option<JoinHandle<()>>,
}

impl Pending {
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the continuation to return. Propagates a panic raised by it.
    pub fn join(self) -> thread::Result<()> {
        match self.handle {
            Some(handle) => handle.join(),
            None => Ok(()),
        }
    }
}
