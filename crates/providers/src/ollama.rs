//! Ollama chat client.
//!
//! Talks to a local Ollama daemon over its native HTTP API:
//! - `POST /api/chat` for completions (with `format: "json"` when the
//!   caller requests structured output)
//! - `GET /api/tags` for model listing
//! - `POST /api/show` for health checks
//!
//! Transient connectivity failures are retried up to [`MAX_RETRIES`] times
//! with increasing backoff delays; exhausting the retries yields
//! `ProviderError::Unavailable`, the one hard failure the reasoning loop
//! surfaces to its caller.

use async_trait::async_trait;
use openclaw_config::OllamaSettings;
use openclaw_core::error::ProviderError;
use openclaw_core::message::Message;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RETRIES: usize = 3;
const BACKOFF: [Duration; 3] = [
    Duration::from_millis(500),
    Duration::from_millis(1000),
    Duration::from_millis(2000),
];

/// All interaction with Ollama goes through this client.
pub struct OllamaClient {
    base_url: String,
    model: String,
    temperature: f32,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client from connection settings.
    pub fn new(settings: &OllamaSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            client,
        }
    }

    /// The model currently in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Switch model without recreating the client (settings hot-reload).
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
    }

    async fn chat_once(
        &self,
        messages: &[Message],
        json_mode: bool,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/api/chat", self.base_url);

        let mut body = serde_json::json!({
            "model": self.model,
            "messages": messages,
            "stream": false,
            "options": { "temperature": self.temperature },
        });
        if json_mode {
            body["format"] = serde_json::json!("json");
        }

        debug!(model = %self.model, json_mode, "Sending chat request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(ProviderError::ModelNotFound(self.model.clone()));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Ollama returned error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(parsed.message.content)
    }
}

#[async_trait]
impl openclaw_core::ChatClient for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(
        &self,
        messages: &[Message],
        json_mode: bool,
    ) -> Result<String, ProviderError> {
        let mut last_error: Option<ProviderError> = None;

        for attempt in 0..MAX_RETRIES {
            match self.chat_once(messages, json_mode).await {
                Ok(text) => return Ok(text),
                // Model-level errors will not heal on retry.
                Err(e @ ProviderError::ModelNotFound(_)) => return Err(e),
                Err(e) => {
                    if attempt < MAX_RETRIES - 1 {
                        let wait = BACKOFF[attempt];
                        warn!(
                            attempt = attempt + 1,
                            max = MAX_RETRIES,
                            wait_ms = wait.as_millis() as u64,
                            error = %e,
                            "Ollama call failed, retrying"
                        );
                        tokio::time::sleep(wait).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let reason = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown error".into());
        Err(ProviderError::Unavailable(reason))
    }

    async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/api/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if response.status().as_u16() != 200 {
            return Ok(Vec::new());
        }

        let parsed: TagsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/api/show", self.base_url);
        let body = serde_json::json!({ "model": self.model });
        match self.client.post(&url).json(&body).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

// ── Wire types ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagModel>,
}

#[derive(Deserialize)]
struct TagModel {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let settings = OllamaSettings {
            base_url: "http://localhost:11434/".into(),
            ..Default::default()
        };
        let client = OllamaClient::new(&settings);
        assert_eq!(client.base_url, "http://localhost:11434");
    }

    #[test]
    fn chat_response_deserializes() {
        let raw = r#"{"model":"phi4-mini","message":{"role":"assistant","content":"hi"},"done":true}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.message.content, "hi");
    }

    #[test]
    fn tags_response_deserializes() {
        let raw = r#"{"models":[{"name":"phi4-mini"},{"name":"llama3:8b"}]}"#;
        let parsed: TagsResponse = serde_json::from_str(raw).unwrap();
        let names: Vec<_> = parsed.models.into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["phi4-mini", "llama3:8b"]);
    }

    #[test]
    fn backoff_schedule_is_increasing() {
        assert!(BACKOFF[0] < BACKOFF[1] && BACKOFF[1] < BACKOFF[2]);
        assert_eq!(BACKOFF.len(), MAX_RETRIES);
    }
}
