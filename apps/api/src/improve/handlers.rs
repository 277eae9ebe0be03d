use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::{GatewayError, TracedError};
use crate::state::AppState;

/// POST /v1/improve-prompt
pub async fn handle_improve_prompt(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, TracedError> {
    let trace_id = Uuid::new_v4();
    let span = tracing::info_span!("improve_prompt", %trace_id);

    forward(&state, trace_id, payload)
        .instrument(span)
        .await
        .map_err(|e| e.traced(trace_id))
}

async fn forward(
    state: &AppState,
    trace_id: Uuid,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, GatewayError> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(GatewayError::PayloadTooLarge)
        }
        Err(_) => return Err(GatewayError::PromptRequired),
    };
    let prompt = extract_prompt(&body).ok_or(GatewayError::PromptRequired)?;

    info!("Forwarding prompt to {}", state.inference.url());
    let reply = state.inference.improve_prompt(prompt, trace_id).await?;

    if !reply.status.is_success() {
        return Err(GatewayError::InferenceFailed {
            status: reply.status.as_u16(),
            detail: reply.body,
        });
    }

    let Value::Object(upstream) = reply.body else {
        return Err(GatewayError::InvalidJsonFromInference(
            "expected a JSON object".to_string(),
        ));
    };

    info!("Inference succeeded");
    Ok(Json(Value::Object(with_trace_id(trace_id, upstream))))
}

/// The prompt must be a non-empty string. No trimming or length check here;
/// the inference tier owns those rules.
fn extract_prompt(body: &Value) -> Option<&str> {
    body.get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
}

/// `trace_id` first, then the upstream keys; upstream wins on collision.
fn with_trace_id(trace_id: Uuid, upstream: Map<String, Value>) -> Map<String, Value> {
    let mut merged = Map::new();
    merged.insert("trace_id".to_string(), Value::String(trace_id.to_string()));
    merged.extend(upstream);
    merged
}
