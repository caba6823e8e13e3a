//! ChatClient trait — the abstraction over the language-model backend.
//!
//! The reasoning loop sends a message list and receives the raw assistant
//! text; when `json_mode` is set the backend is instructed to emit exactly
//! one JSON object (the structured four-field reply the loop parses).
//!
//! Transport-level retry belongs to the implementation, not the loop: a
//! client exhausts its own retries and then returns
//! `ProviderError::Unavailable`, which the loop surfaces unchanged.

use crate::error::ProviderError;
use crate::message::Message;
use async_trait::async_trait;

/// The language-model collaborator.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// A human-readable name for this client (e.g., "ollama").
    fn name(&self) -> &str;

    /// Send messages and return the full assistant response text.
    ///
    /// `json_mode` requests structured output: the backend constrains the
    /// reply to a single JSON object.
    async fn chat(
        &self,
        messages: &[Message],
        json_mode: bool,
    ) -> std::result::Result<String, ProviderError>;

    /// Return names of all available models.
    async fn list_models(&self) -> std::result::Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }

    /// Health check — can we reach the backend and is the model present?
    async fn health_check(&self) -> bool {
        true
    }
}
