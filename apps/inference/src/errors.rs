use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Field-level description of a rejected request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn prompt(kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body", "prompt"],
            msg: msg.into(),
            kind,
        }
    }

    pub fn body(kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body"],
            msg: msg.into(),
            kind,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Bodies use the `{"detail": ...}` envelope existing clients of this
/// endpoint already parse.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request: {}", .0.msg)]
    InvalidRequest(FieldError),

    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    #[error("Model did not return valid JSON")]
    MalformedModelOutput { raw: String },

    #[error("Missing required keys")]
    IncompleteModelOutput { parsed: Value },
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::UpstreamFailure(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => {
                FieldError::prompt("value_error", rejection.body_text())
            }
            JsonRejection::JsonSyntaxError(_) => {
                FieldError::body("json_invalid", rejection.body_text())
            }
            _ => FieldError::body("body_error", rejection.body_text()),
        };
        AppError::InvalidRequest(field)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::InvalidRequest(field) => {
                tracing::warn!("Rejected request: {}", field.msg);
                (StatusCode::BAD_REQUEST, json!([field]))
            }
            AppError::UpstreamFailure(msg) => {
                tracing::error!("Upstream failure: {msg}");
                (StatusCode::BAD_GATEWAY, Value::String(msg))
            }
            AppError::MalformedModelOutput { raw } => {
                tracing::error!("Model did not return valid JSON ({} bytes)", raw.len());
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Model did not return valid JSON",
                        "raw": raw
                    }),
                )
            }
            AppError::IncompleteModelOutput { parsed } => {
                tracing::error!("Model output is missing required keys");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "error": "Missing required keys",
                        "raw": parsed
                    }),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
