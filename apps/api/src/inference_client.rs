//! Client for the internal inference service.
//!
//! The gateway never talks to the model provider itself; every audit request
//! is forwarded here with the gateway's trace id attached.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::GatewayError;

/// Header carrying the gateway trace id to the inference tier.
pub const TRACE_ID_HEADER: &str = "x-trace-id";

/// Status and decoded JSON body returned by the inference service.
#[derive(Debug)]
pub struct InferenceReply {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    url: String,
}

impl InferenceClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forwards `prompt` untouched. Any decodable reply is returned,
    /// whatever its status; callers decide what a non-2xx means.
    pub async fn improve_prompt(
        &self,
        prompt: &str,
        trace_id: Uuid,
    ) -> Result<InferenceReply, GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .header(TRACE_ID_HEADER, trace_id.to_string())
            .json(&json!({ "prompt": prompt }))
            .send()
            .await
            .map_err(|e| GatewayError::InferenceUnreachable(e.to_string()))?;

        let status = response.status();
        let body = response
            .json::<Value>()
            .await
            .map_err(|e| GatewayError::InvalidJsonFromInference(e.to_string()))?;

        Ok(InferenceReply { status, body })
    }
}
