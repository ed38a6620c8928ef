//! Model backend client for article generation.
//!
//! Talks to a local Ollama server over its `/api/chat` endpoint: one
//! synchronous (blocking) request per generation, carrying a system
//! instruction, the built user prompt, and a fixed sampling options bundle.
//! The response is a single non-streamed completion.
//!
//! Failures here are fatal (exit 2): there is no retry and no fallback.
//! The HTTP client is built without a timeout so the backend's own default
//! applies; long generations on slow hardware are expected.

use crate::config::Config;
use crate::error::{QuillError, Result};
use serde_json::{Value, json};

/// Fixed sampling options sent with every chat request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    /// Sampling temperature.
    pub temperature: f32,
    /// Context window size in tokens.
    pub num_ctx: u32,
    /// Nucleus-sampling threshold.
    pub top_p: f32,
    /// Repetition penalty.
    pub repeat_penalty: f32,
}

impl SamplingOptions {
    /// Take the sampling options from a config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            temperature: config.temperature,
            num_ctx: config.num_ctx,
            top_p: config.top_p,
            repeat_penalty: config.repeat_penalty,
        }
    }
}

/// Blocking client for one Ollama chat completion.
pub struct ModelClient {
    http: reqwest::blocking::Client,
    base_url: String,
    model: String,
    options: SamplingOptions,
}

impl std::fmt::Debug for ModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("options", &self.options)
            .finish()
    }
}

impl ModelClient {
    /// Create a client for the given backend and model tag.
    ///
    /// The underlying HTTP client is configured with no request timeout:
    /// generation time is bounded by the backend, not by this tool.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        options: SamplingOptions,
    ) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| QuillError::ModelError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            options,
        })
    }

    /// The chat endpoint URL for this client.
    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url.trim_end_matches('/'))
    }

    /// Perform one chat completion and return the full response text.
    ///
    /// Blocks until generation completes; there is no incremental delivery.
    pub fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let payload = build_chat_payload(&self.model, system_prompt, user_prompt, &self.options);
        let url = self.chat_url();

        let response = self.http.post(&url).json(&payload).send().map_err(|e| {
            QuillError::ModelError(format!(
                "could not reach model backend at '{}': {}\n\
                 Fix: ensure `ollama serve` is running and the model '{}' is pulled.",
                url, e, self.model
            ))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(QuillError::ModelError(format!(
                "backend returned HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        let body: Value = response.json().map_err(|e| {
            QuillError::ModelError(format!("failed to parse backend response as JSON: {}", e))
        })?;

        extract_content(&body)
    }
}

/// Build the JSON payload for one non-streamed chat request.
fn build_chat_payload(
    model: &str,
    system_prompt: &str,
    user_prompt: &str,
    options: &SamplingOptions,
) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system_prompt },
            { "role": "user", "content": user_prompt },
        ],
        "options": {
            "temperature": options.temperature,
            "num_ctx": options.num_ctx,
            "top_p": options.top_p,
            "repeat_penalty": options.repeat_penalty,
        },
        "stream": false,
    })
}

/// Extract `message.content` from a chat response body.
fn extract_content(body: &Value) -> Result<String> {
    body.get("message")
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            QuillError::ModelError(
                "backend response is missing message content".to_string(),
            )
        })
}
