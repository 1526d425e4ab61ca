//! Completion providers.

use crate::error::UpstreamError;
use async_trait::async_trait;
use log::{debug, warn};
use pillminder_config::CompletionConfig;
use serde_json::{Value, json};
use std::time::Duration;

/// Header carrying the API key. The request URL stays credential-free.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Longest upstream error body kept in an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[async_trait]
/// A remote text completion capability.
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt and return the generated text.
    ///
    /// A reply without text is `Ok("")`, not an error.
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiProvider {
    /// Build a client with a per-request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| UpstreamError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
        })
    }

    /// Build from config, reading the API key from the configured env var.
    pub fn from_config(config: &CompletionConfig) -> Result<Self, UpstreamError> {
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!(
                "completion API key missing; /ai will report errors (env={})",
                config.api_key_env
            );
        }
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            config.timeout(),
        )
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_deref().ok_or(UpstreamError::NotConfigured)?;
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        debug!(
            "sending completion request (model={}, prompt_len={})",
            self.model,
            prompt.len()
        );
        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let text = response.text().await?;
        let reply: Value =
            serde_json::from_str(&text).map_err(|err| UpstreamError::Decode(err.to_string()))?;
        Ok(first_candidate_text(&reply))
    }
}

/// `candidates[0].content.parts[0].text`, or `""` when any step is missing.
fn first_candidate_text(reply: &Value) -> String {
    reply
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
