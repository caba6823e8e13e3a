//! JSON-file backed persistence for to-do items.
//!
//! This is the task-list collaborator consumed by the todo tools and the
//! proactivity engine. Every operation reads the file, mutates, and writes
//! it back, so a write followed by a read in the same process always
//! observes the write. The storage format is a single JSON document:
//!
//! ```json
//! { "items": [ ... ], "categories": ["General", ...] }
//! ```
//!
//! The legacy format (a plain array of items) is still readable.

use chrono::{DateTime, Utc};
use openclaw_core::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

/// Status of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    Pending,
    Done,
}

/// A single to-do entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// Short ID (8 hex chars), referenced by the todo tools.
    pub id: String,

    pub text: String,

    /// Grouping list name.
    #[serde(default = "default_category")]
    pub category: String,

    #[serde(default = "default_status")]
    pub status: TodoStatus,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    "General".into()
}
fn default_status() -> TodoStatus {
    TodoStatus::Pending
}

impl TodoItem {
    fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string()[..8].to_string(),
            text: text.into(),
            category: category.into(),
            status: TodoStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TodoData {
    #[serde(default)]
    items: Vec<TodoItem>,

    #[serde(default)]
    categories: Vec<String>,
}

/// CRUD operations for to-do items, persisted as a JSON file.
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    // ── read ──

    /// Return every to-do item.
    pub fn get_all(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self.load()?.items)
    }

    /// Return only items with status `pending`.
    pub fn get_pending(&self) -> Result<Vec<TodoItem>, StoreError> {
        Ok(self
            .load()?
            .items
            .into_iter()
            .filter(|i| i.status == TodoStatus::Pending)
            .collect())
    }

    /// Return all known category names (including empty ones).
    pub fn get_categories(&self) -> Result<Vec<String>, StoreError> {
        let data = self.load()?;
        let mut cats = data.categories;
        for item in &data.items {
            if !cats.contains(&item.category) {
                cats.push(item.category.clone());
            }
        }
        Ok(cats)
    }

    // ── write ──

    /// Create and persist a new to-do item. Returns the created item.
    pub fn add(
        &self,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<TodoItem, StoreError> {
        let mut data = self.load()?;
        let item = TodoItem::new(text, category);
        if !data.categories.contains(&item.category) {
            data.categories.push(item.category.clone());
        }
        data.items.push(item.clone());
        self.save(&data)?;
        Ok(item)
    }

    /// Add multiple items at once to one category.
    pub fn bulk_add(
        &self,
        texts: &[String],
        category: &str,
    ) -> Result<Vec<TodoItem>, StoreError> {
        let mut data = self.load()?;
        let new_items: Vec<TodoItem> = texts
            .iter()
            .filter(|t| !t.trim().is_empty())
            .map(|t| TodoItem::new(t.trim(), category))
            .collect();
        if !data.categories.contains(&category.to_string()) {
            data.categories.push(category.to_string());
        }
        data.items.extend(new_items.clone());
        self.save(&data)?;
        Ok(new_items)
    }

    /// Register a category name, even if it has no items yet.
    pub fn ensure_category(&self, category: &str) -> Result<(), StoreError> {
        let mut data = self.load()?;
        if !data.categories.contains(&category.to_string()) {
            data.categories.push(category.to_string());
            self.save(&data)?;
        }
        Ok(())
    }

    /// Toggle or set an item's status. Returns the updated item, or `None`
    /// if the ID is unknown. `target = None` inverts the current status.
    pub fn toggle_status(
        &self,
        item_id: &str,
        target: Option<TodoStatus>,
    ) -> Result<Option<TodoItem>, StoreError> {
        let mut data = self.load()?;
        let Some(item) = data.items.iter_mut().find(|i| i.id == item_id) else {
            return Ok(None);
        };

        item.status = target.unwrap_or(match item.status {
            TodoStatus::Pending => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Pending,
        });
        item.completed_at = match item.status {
            TodoStatus::Done => Some(Utc::now()),
            TodoStatus::Pending => None,
        };

        let updated = item.clone();
        self.save(&data)?;
        Ok(Some(updated))
    }

    /// Remove an item by ID. Returns true if found.
    pub fn delete_item(&self, item_id: &str) -> Result<bool, StoreError> {
        let mut data = self.load()?;
        let len_before = data.items.len();
        data.items.retain(|i| i.id != item_id);
        if data.items.len() < len_before {
            self.save(&data)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Remove all items in a category. Returns the count of deleted items.
    pub fn delete_category(&self, category: &str) -> Result<usize, StoreError> {
        let mut data = self.load()?;
        let len_before = data.items.len();
        data.items.retain(|i| i.category != category);
        let count = len_before - data.items.len();
        data.categories.retain(|c| c != category);
        self.save(&data)?;
        Ok(count)
    }

    // ── internal ──

    fn load(&self) -> Result<TodoData, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => {
                return Ok(TodoData {
                    items: Vec::new(),
                    categories: vec!["General".into()],
                });
            }
        };

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))?;

        // Legacy format: a plain array of items.
        if value.is_array() {
            debug!("Migrating legacy to-do file format");
            let items: Vec<TodoItem> =
                serde_json::from_value(value).map_err(|e| StoreError::Corrupt(e.to_string()))?;
            let mut categories = vec!["General".to_string()];
            for item in &items {
                if !categories.contains(&item.category) {
                    categories.push(item.category.clone());
                }
            }
            return Ok(TodoData { items, categories });
        }

        serde_json::from_value(value).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    fn save(&self, data: &TodoData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(data).map_err(|e| StoreError::Io(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Io(e.to_string()))
    }
}
