//! In-memory store — useful for testing and ephemeral sessions.

use crate::score::keyword_distance;
use async_trait::async_trait;
use openclaw_core::error::MemoryError;
use openclaw_core::memory::{default_stored_at, LongTermMemory, MemoryRecord, MemoryResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A long-term store that keeps records in a Vec and scores queries with
/// keyword overlap. No persistence.
pub struct InMemoryStore {
    records: Arc<RwLock<Vec<MemoryRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a short record ID (12 hex chars).
pub(crate) fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Rank records against a query and keep the `limit` closest.
pub(crate) fn rank_records(
    records: &[MemoryRecord],
    query: &str,
    limit: usize,
) -> Vec<MemoryResult> {
    let mut results: Vec<MemoryResult> = records
        .iter()
        .filter_map(|r| {
            keyword_distance(query, &r.text).map(|distance| MemoryResult {
                id: r.id.clone(),
                text: r.text.clone(),
                distance,
                metadata: r.metadata.clone(),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    results.truncate(limit);
    results
}

#[async_trait]
impl LongTermMemory for InMemoryStore {
    fn name(&self) -> &str {
        "in_memory"
    }

    async fn store(
        &self,
        text: &str,
        mut metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Result<String, MemoryError> {
        default_stored_at(&mut metadata);
        let id = new_record_id();
        self.records.write().await.push(MemoryRecord {
            id: id.clone(),
            text: text.to_string(),
            metadata,
        });
        Ok(id)
    }

    async fn query(&self, text: &str, limit: usize) -> Result<Vec<MemoryResult>, MemoryError> {
        let records = self.records.read().await;
        Ok(rank_records(&records, text, limit))
    }

    async fn list_all(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, MemoryError> {
        let mut records = self.records.write().await;
        let len_before = records.len();
        records.retain(|r| r.id != id);
        Ok(records.len() < len_before)
    }

    async fn count(&self) -> Result<usize, MemoryError> {
        Ok(self.records.read().await.len())
    }
}
