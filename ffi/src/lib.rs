//! C-ABI wrapper around `xhrkit-core`.
//!
//! # Overview
//! Lets any language with a C FFI build JSON requests and complete the
//! exchanges it executed itself, either through a success/failure callback
//! pair (`xhr_complete`) or a result envelope (`xhr_complete_result`).
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - `xhr_complete` invokes exactly one of its two callbacks whenever it
//!   returns `Ok`, and neither otherwise.
//! - The C caller owns all returned pointers and must release them with the
//!   matching `xhr_free_*` function. Strings passed into callbacks are
//!   borrowed and only valid during the call.

pub mod types;

use std::ffi::{c_void, CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use xhrkit_core::{complete, complete_with, RequestConfig};

use types::*;

/// Success continuation: receives the decoded value as JSON text.
pub type XhrSuccessFn = extern "C" fn(json: *const c_char, user_data: *mut c_void);

/// Failure continuation: receives the reason for the failed exchange.
pub type XhrFailureFn = extern "C" fn(failure: *const FfiFailure, user_data: *mut c_void);

// ---------------------------------------------------------------------------
// Build request
// ---------------------------------------------------------------------------

/// Build a JSON request.
///
/// `method` is an `FfiHttpMethod` discriminant. `data_json` is the POST
/// payload as JSON text; null selects the default payload `{}`. GET requests
/// never carry a body.
///
/// Returns null if `url` is null, `method` is unknown, or `data_json` is not
/// valid JSON. The caller must free the result with `xhr_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn xhr_build_request(
    method: i32,
    url: *const c_char,
    data_json: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if url.is_null() {
            return std::ptr::null_mut();
        }
        let Some(method) = FfiHttpMethod::from_raw(method) else {
            return std::ptr::null_mut();
        };
        let Ok(url) = unsafe { CStr::from_ptr(url) }.to_str() else {
            return std::ptr::null_mut();
        };

        let mut config = RequestConfig::default();
        if !data_json.is_null() {
            let Ok(text) = unsafe { CStr::from_ptr(data_json) }.to_str() else {
                return std::ptr::null_mut();
            };
            match serde_json::from_str(text) {
                Ok(data) => config.data = Some(data),
                Err(_) => return std::ptr::null_mut(),
            }
        }

        match xhrkit_core::build_request(method.into(), url, &config) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

/// Classify a completed exchange and invoke exactly one continuation.
///
/// Status 200 with a JSON body calls `on_success`; anything else calls
/// `on_failure`. Returns `NullArg` without calling either when `response` or
/// a callback is null.
#[unsafe(no_mangle)]
pub extern "C" fn xhr_complete(
    response: *const FfiHttpResponse,
    on_success: Option<XhrSuccessFn>,
    on_failure: Option<XhrFailureFn>,
    user_data: *mut c_void,
) -> FfiErrorCode {
    catch_unwind(|| {
        let (Some(on_success), Some(on_failure)) = (on_success, on_failure) else {
            return FfiErrorCode::NullArg;
        };
        if response.is_null() {
            return FfiErrorCode::NullArg;
        }
        let core_resp = unsafe { &*response }.to_core();

        complete_with(
            core_resp,
            |value| {
                // JSON text escapes NUL, so the fallback is unreachable.
                let json = CString::new(value.to_string()).unwrap_or_default();
                on_success(json.as_ptr(), user_data);
            },
            |err| {
                let message = CString::new(err.to_string()).unwrap_or_default();
                let failure = FfiFailure {
                    code: FfiErrorCode::of(&err),
                    http_status: err.status().unwrap_or(0),
                    message: message.as_ptr(),
                };
                on_failure(&failure, user_data);
            },
        );
        FfiErrorCode::Ok
    })
    .unwrap_or(FfiErrorCode::Panic)
}

/// Classify a completed exchange into a heap-allocated result envelope.
///
/// The caller must free the result with `xhr_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn xhr_complete_result(response: *const FfiHttpResponse) -> *mut FfiExchangeResult {
    catch_unwind(|| {
        if response.is_null() {
            return FfiExchangeResult::null_arg("response");
        }
        let core_resp = unsafe { &*response }.to_core();
        match complete(core_resp.status, core_resp.body.as_deref()) {
            Ok(value) => {
                FfiExchangeResult::ok(CString::new(value.to_string()).unwrap_or_default())
            }
            Err(e) => FfiExchangeResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiExchangeResult::panic("panic in xhr_complete_result"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `xhr_build_request`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn xhr_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.url.is_null() {
            drop(unsafe { CString::from_raw(req.url) });
        }
        if !req.body.is_null() {
            drop(unsafe { CString::from_raw(req.body) });
        }
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Vec::from_raw_parts(req.headers, req.headers_len as usize, req.headers_len as usize)
            };
            free_headers(headers);
        }
    });
}

/// Free an `FfiExchangeResult` returned by `xhr_complete_result`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn xhr_free_result(result: *mut FfiExchangeResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.json.is_null() {
            drop(unsafe { CString::from_raw(result.json) });
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
