use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::app;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(String::new())
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

// --- fixtures ---

#[tokio::test]
async fn json_returns_object() {
    let resp = app().oneshot(get_request("/json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"a": 1}));
}

#[tokio::test]
async fn empty_object_returns_braces() {
    let resp = app().oneshot(get_request("/empty-object")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({}));
}

#[tokio::test]
async fn not_json_returns_plain_text_with_200() {
    let resp = app().oneshot(get_request("/not-json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"not json");
}

#[tokio::test]
async fn empty_returns_no_body() {
    let resp = app().oneshot(get_request("/empty")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

// --- status ---

#[tokio::test]
async fn status_returns_requested_code() {
    for code in [404u16, 500, 503] {
        let resp = app()
            .oneshot(get_request(&format!("/status/{code}")))
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), code);
        assert!(body_bytes(resp).await.is_empty());
    }
}

#[tokio::test]
async fn status_with_non_numeric_code_returns_400() {
    let resp = app().oneshot(get_request("/status/teapot")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bytes_returns_non_utf8_body_with_requested_code() {
    let resp = app().oneshot(get_request("/bytes/500")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_bytes(resp).await;
    assert_eq!(&body[..], mock_server::NON_UTF8_BODY);
    assert!(std::str::from_utf8(&body).is_err());
}

// --- echo ---

#[tokio::test]
async fn echo_post_returns_body() {
    let resp = app()
        .oneshot(json_request("POST", "/echo", r#"{"name":"x","n":[1,2]}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"name": "x", "n": [1, 2]}));
}

#[tokio::test]
async fn echo_get_returns_empty_object() {
    let resp = app().oneshot(get_request("/echo")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({}));
}

#[tokio::test]
async fn echo_post_malformed_json_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/echo", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn echo_post_without_content_type_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/echo")
        .body("{}".to_string())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}
