use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub fn app() -> Router {
    Router::new()
        .route("/json", get(json_object))
        .route("/empty-object", get(empty_object))
        .route("/not-json", get(not_json))
        .route("/empty", get(empty))
        .route("/status/{code}", get(status))
        .route("/bytes/{code}", get(raw_bytes))
        .route("/echo", get(empty_object).post(echo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn json_object() -> Json<Value> {
    Json(json!({ "a": 1 }))
}

async fn empty_object() -> Json<Value> {
    Json(json!({}))
}

async fn not_json() -> (StatusCode, &'static str) {
    (StatusCode::OK, "not json")
}

async fn empty() -> StatusCode {
    StatusCode::OK
}

async fn status(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    debug!(code, "status fixture");
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

/// Body that is not valid UTF-8.
pub const NON_UTF8_BODY: &[u8] = b"\xff\xfe oops";

async fn raw_bytes(Path(code): Path<u16>) -> Result<(StatusCode, &'static [u8]), StatusCode> {
    let code = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((code, NON_UTF8_BODY))
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    debug!(%body, "echo");
    Json(body)
}
