//! Memory manager — the unified facade over both memory tiers.
//!
//! The reasoning loop interacts with this type instead of touching the
//! short-term window or the long-term store directly. It also builds the
//! final context list sent to the model:
//!
//! 1. System message (always first, set in STM)
//! 2. Recalled long-term facts, injected as a transient system note
//! 3. Recent conversation messages from STM
//!
//! The recalled-facts message is never persisted to STM — it is rebuilt
//! fresh for every turn from whatever the store returns.

use crate::short_term::ShortTermMemory;
use openclaw_core::error::MemoryError;
use openclaw_core::memory::{LongTermMemory, MemoryRecord, MemoryResult};
use openclaw_core::message::{Message, Role};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of long-term results recalled per turn.
const RECALL_LIMIT: usize = 5;

pub struct MemoryManager {
    stm: ShortTermMemory,
    ltm: Arc<dyn LongTermMemory>,
}

impl MemoryManager {
    pub fn new(stm: ShortTermMemory, ltm: Arc<dyn LongTermMemory>) -> Self {
        Self { stm, ltm }
    }

    // ── Short-term ──

    /// Set or update the system prompt in STM.
    pub fn set_system(&mut self, content: impl Into<String>) {
        self.stm.set_system(content);
    }

    /// Append a user / assistant message to STM.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        self.stm.add(role, content);
    }

    /// Raw STM snapshot (debug views).
    pub fn working_memory(&self) -> Vec<Message> {
        self.stm.snapshot()
    }

    /// Approximate STM token usage.
    pub fn token_count(&self) -> usize {
        self.stm.token_count()
    }

    /// Drop the conversation history, keeping the system prompt.
    pub fn clear_conversation(&mut self) {
        self.stm.clear();
    }

    // ── Long-term ──

    /// Persist a fact / preference to the long-term store.
    pub async fn remember(
        &self,
        text: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Result<String, MemoryError> {
        self.ltm.store(text, metadata).await
    }

    /// Search long-term memory. A failing or empty store yields an empty
    /// result set — recall never aborts a turn.
    pub async fn recall(&self, query: &str, limit: usize) -> Vec<MemoryResult> {
        match self.ltm.query(query, limit).await {
            Ok(results) => {
                if !results.is_empty() {
                    debug!(count = results.len(), "Recalled long-term memories");
                }
                results
            }
            Err(e) => {
                warn!(error = %e, "Long-term recall failed");
                Vec::new()
            }
        }
    }

    /// Return all stored records (debug views).
    pub async fn long_term_records(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        self.ltm.list_all().await
    }

    /// Delete a long-term record by ID.
    pub async fn delete_long_term(&self, id: &str) -> Result<bool, MemoryError> {
        self.ltm.delete(id).await
    }

    // ── Context assembly ──

    /// Build the full message list for a model call.
    pub async fn build_context(&self, query: Option<&str>) -> Vec<Message> {
        let mut messages: Vec<Message> = Vec::new();
        let mut stm_msgs = self.stm.snapshot();

        // 1. System message
        if stm_msgs.first().map(|m| m.role) == Some(Role::System) {
            messages.push(stm_msgs.remove(0));
        }

        // 2. Recalled facts (transient, never written back to STM)
        if let Some(query) = query {
            let recalled = self.recall(query, RECALL_LIMIT).await;
            if !recalled.is_empty() {
                let facts = recalled
                    .iter()
                    .map(|r| format!("- {}", r.text))
                    .collect::<Vec<_>>()
                    .join("\n");
                messages.push(Message::system(format!(
                    "Recalled facts from long-term memory:\n{facts}"
                )));
            }
        }

        // 3. Conversation history
        messages.extend(stm_msgs);
        messages
    }
}
