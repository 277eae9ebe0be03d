use anyhow::{Context, Result};

pub const DEFAULT_MODEL_ID: &str = "meta-llama/Llama-3.1-8B-Instruct:novita";
pub const DEFAULT_HF_BASE_URL: &str = "https://router.huggingface.co/v1";

/// Inference service configuration loaded from environment variables.
/// Read once at startup; fails if `HF_TOKEN` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_token: String,
    pub hf_base_url: String,
    pub model_id: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_token: require_env("HF_TOKEN")?,
            hf_base_url: std::env::var("HF_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_HF_BASE_URL.to_string()),
            model_id: std::env::var("MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}
