//! File-based long-term store — persistent JSONL storage.
//!
//! Each line of the file is one JSON-encoded `MemoryRecord`. Records are
//! loaded into memory on creation and flushed to disk on every mutation,
//! giving fast reads with durable writes. Crash-consistency guarantees
//! beyond that are out of scope for this collaborator.
//!
//! Storage location (default): `~/.openclaw/memory/records.jsonl`

use crate::in_memory::{new_record_id, rank_records};
use async_trait::async_trait;
use openclaw_core::error::MemoryError;
use openclaw_core::memory::{default_stored_at, LongTermMemory, MemoryRecord, MemoryResult};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A file-backed long-term store using JSONL (one JSON object per line).
pub struct FileStore {
    path: PathBuf,
    records: Arc<RwLock<Vec<MemoryRecord>>>,
}

impl FileStore {
    /// Open a store at the given path.
    ///
    /// If the file exists, records are loaded from it. If not, the store
    /// starts empty and the file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        let records = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = records.len(), "File store loaded");
        Self {
            path,
            records: Arc::new(RwLock::new(records)),
        }
    }

    fn load_from_disk(path: &PathBuf) -> Vec<MemoryRecord> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Vec::new(), // file doesn't exist yet
        };

        content
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(error = %e, "Skipping corrupt record line");
                    None
                }
            })
            .collect()
    }

    async fn flush(&self) -> Result<(), MemoryError> {
        let records = self.records.read().await;
        let mut out = String::new();
        for record in records.iter() {
            let line = serde_json::to_string(record)
                .map_err(|e| MemoryError::Storage(e.to_string()))?;
            out.push_str(&line);
            out.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| MemoryError::Storage(e.to_string()))?;
        }
        std::fs::write(&self.path, out).map_err(|e| MemoryError::Storage(e.to_string()))
    }
}

#[async_trait]
impl LongTermMemory for FileStore {
    fn name(&self) -> &str {
        "file"
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
        self.flush().await?;
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
        let existed = {
            let mut records = self.records.write().await;
            let len_before = records.len();
            records.retain(|r| r.id != id);
            records.len() < len_before
        };
        if existed {
            self.flush().await?;
        }
        Ok(existed)
    }

    async fn count(&self) -> Result<usize, MemoryError> {
        Ok(self.records.read().await.len())
    }
}
