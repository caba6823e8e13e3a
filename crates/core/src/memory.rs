//! Long-term memory trait — persisted semantic recall.
//!
//! The long-term store holds facts and preferences across sessions. The
//! core consumes it through the `LongTermMemory` trait; the concrete
//! embedding / index implementation is a replaceable collaborator.
//!
//! Sign convention: `MemoryResult::distance` is a **distance**, not a
//! similarity — lower means closer. Implementations must rank results by
//! ascending distance.

use crate::error::MemoryError;
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord {
    /// Unique ID for this record
    pub id: String,

    /// The stored text
    pub text: String,

    /// Metadata as a key → primitive mapping. `stored_at` is defaulted to
    /// the store time (RFC 3339 UTC) only when the caller did not set it.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// A single search result: a record plus its distance to the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryResult {
    pub id: String,
    pub text: String,

    /// Distance to the query. Lower = closer.
    pub distance: f32,

    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

/// Fill in the `stored_at` metadata key when absent.
///
/// Shared by all store implementations so the default-fill rule stays
/// uniform: an explicit caller-provided value is never overwritten.
pub fn default_stored_at(metadata: &mut serde_json::Map<String, serde_json::Value>) {
    if !metadata.contains_key("stored_at") {
        metadata.insert(
            "stored_at".to_string(),
            serde_json::Value::String(Utc::now().to_rfc3339()),
        );
    }
}

/// The long-term memory collaborator.
///
/// Implementations: in-memory keyword store (testing / ephemeral sessions),
/// JSONL file store. An empty store returns empty results, never an error.
#[async_trait]
pub trait LongTermMemory: Send + Sync {
    /// The store name (e.g., "in_memory", "file").
    fn name(&self) -> &str;

    /// Store a text chunk with metadata. Returns the generated record ID.
    async fn store(
        &self,
        text: &str,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<String, MemoryError>;

    /// Retrieve the closest records for a query, ranked by ascending
    /// distance. Returns at most `limit` results.
    async fn query(
        &self,
        text: &str,
        limit: usize,
    ) -> std::result::Result<Vec<MemoryResult>, MemoryError>;

    /// Return every stored record.
    async fn list_all(&self) -> std::result::Result<Vec<MemoryRecord>, MemoryError>;

    /// Remove a record by ID. Returns true if it existed.
    async fn delete(&self, id: &str) -> std::result::Result<bool, MemoryError>;

    /// Number of stored records.
    async fn count(&self) -> std::result::Result<usize, MemoryError>;
}
