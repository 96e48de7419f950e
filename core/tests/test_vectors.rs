//! Verify request building and completion against JSON test vectors stored
//! in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON rather than raw strings so field order
//! never causes false negatives.

use xhrkit_core::{build_request, complete, ExchangeError, HttpMethod, RequestConfig};

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Complete
// ---------------------------------------------------------------------------

#[test]
fn complete_test_vectors() {
    let raw = include_str!("../../test-vectors/complete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let body = case["body"].as_str();

        let result = complete(status, body);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Status" => assert!(
                    matches!(err, ExchangeError::Status(s) if s == status),
                    "{name}: expected Status({status}), got {err:?}"
                ),
                "Decode" => assert!(err.is_decode(), "{name}: expected Decode, got {err:?}"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let value = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            assert_eq!(value, case["expected_value"], "{name}: parsed value");
        }
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/request.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method = parse_method(case["method"].as_str().unwrap());
        let url = case["url"].as_str().unwrap();
        let config: RequestConfig = serde_json::from_value(case["config"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = build_request(method, url, &config).unwrap();
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(req.url, url, "{name}: url");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match &expected_req["body"] {
            serde_json::Value::Null => assert!(req.body.is_none(), "{name}: body should be None"),
            expected => {
                let body: serde_json::Value =
                    serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
                assert_eq!(&body, expected, "{name}: body");
            }
        }
    }
}
