//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversions live here so
//! `lib.rs` stays focused on the `extern "C"` surface.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use xhrkit_core::{ExchangeError, HttpMethod, HttpResponse};

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
}

impl FfiHttpMethod {
    /// Map a raw discriminant received from C. Unknown values yield `None`.
    pub(crate) fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(FfiHttpMethod::Get),
            1 => Some(FfiHttpMethod::Post),
            _ => None,
        }
    }
}

impl From<FfiHttpMethod> for HttpMethod {
    fn from(m: FfiHttpMethod) -> Self {
        match m {
            FfiHttpMethod::Get => HttpMethod::Get,
            FfiHttpMethod::Post => HttpMethod::Post,
        }
    }
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `xhr_build_request`. The C caller executes it and passes the
/// response back through `xhr_complete` or `xhr_complete_result`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    ///
    /// Returns null if any string contains an interior NUL byte.
    pub(crate) fn from_core(req: xhrkit_core::HttpRequest) -> *mut Self {
        let Ok(url) = CString::new(req.url) else {
            return std::ptr::null_mut();
        };
        let body = match req.body.map(CString::new) {
            Some(Ok(b)) => b.into_raw(),
            Some(Err(_)) => return std::ptr::null_mut(),
            None => std::ptr::null_mut(),
        };

        let mut ffi_headers = Vec::with_capacity(req.headers.len());
        for (k, v) in req.headers {
            match (CString::new(k), CString::new(v)) {
                (Ok(key), Ok(value)) => ffi_headers.push(FfiHeader {
                    key: key.into_raw(),
                    value: value.into_raw(),
                }),
                _ => {
                    free_headers(ffi_headers);
                    if !body.is_null() {
                        drop(unsafe { CString::from_raw(body) });
                    }
                    return std::ptr::null_mut();
                }
            }
        }

        let headers_len = ffi_headers.len() as u32;
        let headers = if ffi_headers.is_empty() {
            std::ptr::null_mut()
        } else {
            // Exact capacity so `xhr_free_request` can rebuild the Vec from len.
            let mut boxed = ffi_headers.into_boxed_slice();
            let ptr = boxed.as_mut_ptr();
            std::mem::forget(boxed);
            ptr
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: url.into_raw(),
            headers,
            headers_len,
            body,
        }))
    }
}

/// Free the C strings owned by each header.
pub(crate) fn free_headers(headers: Vec<FfiHeader>) {
    for h in headers {
        if !h.key.is_null() {
            drop(unsafe { CString::from_raw(h.key) });
        }
        if !h.value.is_null() {
            drop(unsafe { CString::from_raw(h.value) });
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// A completed exchange described as C-compatible plain data.
///
/// The C caller builds this after executing a request. A null `body` means
/// no body was received. The FFI layer reads but never frees these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

impl FfiHttpResponse {
    /// Copy into a core `HttpResponse`. Invalid UTF-8 sequences become
    /// U+FFFD, the same as `UreqTransport`; a body that is JSON apart from
    /// those bytes therefore still decodes.
    pub(crate) fn to_core(&self) -> HttpResponse {
        let body = if self.body.is_null() {
            None
        } else {
            Some(
                unsafe { CStr::from_ptr(self.body) }
                    .to_string_lossy()
                    .into_owned(),
            )
        };
        HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// Error codes used across the C surface.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Status = 1,
    Decode = 2,
    Serialization = 3,
    Network = 4,
    Panic = 5,
    NullArg = 6,
}

impl FfiErrorCode {
    pub(crate) fn of(err: &ExchangeError) -> Self {
        match err {
            ExchangeError::Status(_) => FfiErrorCode::Status,
            ExchangeError::Decode(_) => FfiErrorCode::Decode,
            ExchangeError::Serialization(_) => FfiErrorCode::Serialization,
            ExchangeError::Network(_) => FfiErrorCode::Network,
        }
    }
}

/// Failure reason handed to the `on_failure` callback of `xhr_complete`.
///
/// `http_status` is set for `Status` failures and 0 otherwise. `message` is
/// borrowed: it is valid only until the callback returns.
#[repr(C)]
pub struct FfiFailure {
    pub code: FfiErrorCode,
    pub http_status: u16,
    pub message: *const c_char,
}

/// Result envelope returned by `xhr_complete_result`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `json` holds
/// the decoded value re-encoded as compact JSON text. On failure `json` is
/// null and `error_message` is a human-readable C string.
#[repr(C)]
pub struct FfiExchangeResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub json: *mut c_char,
}

impl FfiExchangeResult {
    pub(crate) fn ok(json: CString) -> *mut Self {
        Box::into_raw(Box::new(FfiExchangeResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            json: json.into_raw(),
        }))
    }

    pub(crate) fn from_error(err: ExchangeError) -> *mut Self {
        Self::failure(
            FfiErrorCode::of(&err),
            err.status().unwrap_or(0),
            &err.to_string(),
        )
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, 0, &format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, 0, msg)
    }

    fn failure(error_code: FfiErrorCode, http_status: u16, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiExchangeResult {
            error_code,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status,
            json: std::ptr::null_mut(),
        }))
    }
}
