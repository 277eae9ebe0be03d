use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use serde_json::Value;
use tracing::{info, warn, Instrument};

use crate::audit::models::{ImproveRequest, ImproveRequestBody, ImproveResponse};
use crate::audit::prompts::{build_audit_messages, AUDIT_TEMPERATURE};
use crate::audit::validation::validate_model_output;
use crate::errors::AppError;
use crate::state::AppState;

/// Correlation header set by the gateway.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Trigger count the system instruction asks for. Logged, not enforced.
const EXPECTED_TRIGGERS: std::ops::RangeInclusive<usize> = 3..=7;

/// Trace id sent by the gateway, or `"-"` when absent or not valid UTF-8.
pub fn trace_id_from(headers: &HeaderMap) -> &str {
    headers
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
}

/// POST /internal/improve-prompt
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn handle_improve_prompt(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let span = tracing::info_span!("improve_prompt", trace_id = %trace_id_from(&headers));

    improve_prompt(&state, Json::from_bytes(&body)).instrument(span).await
}

async fn improve_prompt(
    state: &AppState,
    payload: Result<Json<ImproveRequestBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(body) = payload?;
    let request = ImproveRequest::validate(body)?;

    let messages = build_audit_messages(request.prompt());

    info!(
        "Auditing prompt ({} chars) with model {}",
        request.prompt().chars().count(),
        state.config.model_id
    );
    let raw = state
        .llm
        .complete(&state.config.model_id, &messages, AUDIT_TEMPERATURE)
        .await?;

    let response = validate_model_output(&raw)?;

    // Returned as-is either way; the typed view only feeds the logs.
    match ImproveResponse::from_value(&response) {
        Ok(typed) if !EXPECTED_TRIGGERS.contains(&typed.hallucination_triggers.len()) => warn!(
            "Model returned {} triggers, outside the requested {:?}",
            typed.hallucination_triggers.len(),
            EXPECTED_TRIGGERS
        ),
        Ok(_) => {}
        Err(e) => warn!("Model output has required keys but not the expected shape: {e}"),
    }

    info!("Audit complete");
    Ok(Json(response))
}
