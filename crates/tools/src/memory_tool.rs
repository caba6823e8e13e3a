//! Tool for persisting facts to long-term memory.

use async_trait::async_trait;
use openclaw_core::error::ToolError;
use openclaw_core::memory::{LongTermMemory, default_stored_at};
use openclaw_core::tool::{ToolDefinition, ToolExecutor};
use std::sync::Arc;
use tracing::debug;

pub struct SaveMemoryTool {
    long_term: Arc<dyn LongTermMemory>,
}

impl SaveMemoryTool {
    pub fn definition(long_term: Arc<dyn LongTermMemory>) -> ToolDefinition {
        ToolDefinition {
            name: "save_memory".into(),
            description: "Remember a fact or user preference permanently.".into(),
            parameter_description: "fact text to store".into(),
            executor: Arc::new(Self { long_term }),
        }
    }
}

#[async_trait]
impl ToolExecutor for SaveMemoryTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok("Error: nothing to save.".into());
        }

        let mut metadata = serde_json::Map::new();
        metadata.insert("source".into(), "save_memory".into());
        default_stored_at(&mut metadata);

        let id = self
            .long_term
            .store(text, metadata)
            .await
            .map_err(|e| ToolError::ExecutionFailed {
                tool_name: "save_memory".into(),
                reason: e.to_string(),
            })?;
        debug!(%id, "stored long-term memory");
        Ok(format!("Saved to memory (id={id}): {text}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openclaw_memory::InMemoryStore;

    #[tokio::test]
    async fn saves_and_reports_id() {
        let store = Arc::new(InMemoryStore::new());
        let tool = SaveMemoryTool {
            long_term: store.clone(),
        };

        let out = tool.execute("The user's cat is named Miso").await.unwrap();
        assert!(out.starts_with("Saved to memory (id="));
        assert!(out.ends_with("The user's cat is named Miso"));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn blank_input_is_rejected() {
        let tool = SaveMemoryTool {
            long_term: Arc::new(InMemoryStore::new()),
        };
        assert_eq!(tool.execute("  ").await.unwrap(), "Error: nothing to save.");
    }

    #[tokio::test]
    async fn records_carry_source_metadata() {
        let store = Arc::new(InMemoryStore::new());
        let tool = SaveMemoryTool {
            long_term: store.clone(),
        };
        tool.execute("likes green tea").await.unwrap();

        let records = store.list_all().await.unwrap();
        assert_eq!(records[0].metadata.get("source").unwrap(), "save_memory");
        assert!(records[0].metadata.contains_key("stored_at"));
    }
}
