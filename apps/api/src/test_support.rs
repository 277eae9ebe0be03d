//! Router test helpers. Upstream behaviour is supplied by a `wiremock` server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::inference_client::InferenceClient;
use crate::routes::build_router;
use crate::state::AppState;

pub fn state_for(inference_url: &str) -> AppState {
    AppState {
        inference: InferenceClient::new(inference_url),
    }
}

async fn send(state: AppState, request: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(state);
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(state, request).await
}

pub async fn post_raw(state: AppState, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

pub async fn post_json(state: AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(state, uri, &body.to_string()).await
}
