use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;
use uuid::Uuid;

/// Gateway-level error type. Every variant maps to a stable `error` code
/// the browser client switches on.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("prompt is required")]
    PromptRequired,

    #[error("request body too large")]
    PayloadTooLarge,

    #[error("inference service unreachable: {0}")]
    InferenceUnreachable(String),

    #[error("inference service returned invalid JSON: {0}")]
    InvalidJsonFromInference(String),

    #[error("inference service failed with status {status}")]
    InferenceFailed { status: u16, detail: Value },
}

impl GatewayError {
    /// Attaches the request's trace id so the error can be rendered.
    pub fn traced(self, trace_id: Uuid) -> TracedError {
        TracedError {
            trace_id,
            error: self,
        }
    }
}

/// A `GatewayError` bound to the trace id of the request that produced it.
/// Implements `IntoResponse` so handlers can return `Result<T, TracedError>`.
#[derive(Debug)]
pub struct TracedError {
    pub trace_id: Uuid,
    pub error: GatewayError,
}

impl IntoResponse for TracedError {
    fn into_response(self) -> Response {
        let trace_id = self.trace_id;
        let (status, body) = match self.error {
            GatewayError::PromptRequired => (
                StatusCode::BAD_REQUEST,
                json!({ "trace_id": trace_id, "error": "prompt is required" }),
            ),
            GatewayError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "trace_id": trace_id, "error": "payload_too_large" }),
            ),
            GatewayError::InferenceUnreachable(msg) => {
                tracing::error!(%trace_id, "Inference service unreachable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "trace_id": trace_id, "error": "inference_service_unreachable" }),
                )
            }
            GatewayError::InvalidJsonFromInference(msg) => {
                tracing::error!(%trace_id, "Invalid JSON from inference service: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "trace_id": trace_id, "error": "invalid_json_from_inference" }),
                )
            }
            GatewayError::InferenceFailed { status, detail } => {
                tracing::error!(%trace_id, "Inference service returned {status}");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "trace_id": trace_id, "error": "inference_failed", "detail": detail }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
