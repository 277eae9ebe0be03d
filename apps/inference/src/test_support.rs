//! Shared fixtures for router tests: a scripted `ChatCompletion` and request helpers.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::config::{Config, DEFAULT_HF_BASE_URL};
use crate::llm_client::{ChatCompletion, ChatMessage, LlmError};
use crate::routes::build_router;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

enum Script {
    Reply(String),
    Fail { status: u16, message: String },
}

/// Returns a fixed reply (or error) and records every call it receives.
#[derive(Clone)]
pub struct ScriptedLlm {
    script: Arc<Script>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedLlm {
    pub fn replying(text: &str) -> Self {
        Self::new(Script::Reply(text.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::new(Script::Fail {
            status,
            message: message.to_string(),
        })
    }

    fn new(script: Script) -> Self {
        Self {
            script: Arc::new(script),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedLlm {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            messages: messages.to_vec(),
            temperature,
        });
        match self.script.as_ref() {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_state(llm: ScriptedLlm) -> AppState {
    AppState {
        llm: Arc::new(llm),
        config: Config {
            hf_token: "hf_test".to_string(),
            hf_base_url: DEFAULT_HF_BASE_URL.to_string(),
            model_id: "test/model".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        },
    }
}

pub async fn send(llm: ScriptedLlm, request: Request<Body>) -> (StatusCode, Value) {
    let app = build_router(test_state(llm));
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get_json(llm: ScriptedLlm, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(llm, request).await
}

pub async fn post_raw(llm: ScriptedLlm, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(llm, request).await
}

pub async fn post_json(llm: ScriptedLlm, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(llm, uri, &body.to_string()).await
}
