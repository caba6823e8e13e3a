//! To-do list tools consumed by the agent.
//!
//! Tools:
//! - `todo_read`   — show all lists, or tasks in a specific list
//! - `todo_add`    — add one or more tasks to a list (auto-creates list)
//! - `todo_delete` — delete a task by ID, or an entire list by name
//! - `todo_toggle` — invert task status (pending <-> done)
//!
//! Replies are plain text the model reads back as observations, so the
//! exact phrasing here is part of the tool contract.

use async_trait::async_trait;
use openclaw_core::error::ToolError;
use openclaw_core::tool::{ToolDefinition, ToolExecutor};
use openclaw_store::{TodoItem, TodoStatus, TodoStore};
use std::sync::Arc;

fn store_error(e: openclaw_core::error::StoreError) -> ToolError {
    ToolError::ExecutionFailed {
        tool_name: "todo".into(),
        reason: e.to_string(),
    }
}

/// Group items by category, preserving first-seen order.
fn group_by_category(items: &[TodoItem]) -> Vec<(String, Vec<&TodoItem>)> {
    let mut grouped: Vec<(String, Vec<&TodoItem>)> = Vec::new();
    for item in items {
        match grouped.iter_mut().find(|(cat, _)| *cat == item.category) {
            Some((_, list)) => list.push(item),
            None => grouped.push((item.category.clone(), vec![item])),
        }
    }
    grouped
}

fn render_group(category: &str, items: &[&TodoItem]) -> String {
    let mut lines = vec![format!("== {category} ==")];
    for item in items {
        let mark = match item.status {
            TodoStatus::Done => "[x]",
            TodoStatus::Pending => "[ ]",
        };
        lines.push(format!("  {mark} {} | {}", item.id, item.text));
    }
    lines.join("\n")
}

// ── todo_read ─────────────────────────────────────────────────────────────

pub struct TodoReadTool {
    store: Arc<TodoStore>,
}

impl TodoReadTool {
    pub fn definition(store: Arc<TodoStore>) -> ToolDefinition {
        ToolDefinition {
            name: "todo_read".into(),
            description:
                "Read all lists and tasks, or a specific list. ALWAYS call this before any other todo tool."
                    .into(),
            parameter_description:
                "'all' to see everything, or a list name to see one list".into(),
            executor: Arc::new(Self { store }),
        }
    }
}

#[async_trait]
impl ToolExecutor for TodoReadTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let items = self.store.get_all().map_err(store_error)?;
        if items.is_empty() {
            return Ok("No lists or tasks exist yet.".into());
        }

        let grouped = group_by_category(&items);
        let query = input.trim().to_lowercase();

        if !query.is_empty() && query != "all" {
            for (cat, cat_items) in &grouped {
                if cat.to_lowercase() == query {
                    return Ok(render_group(cat, cat_items));
                }
            }
            let available = grouped
                .iter()
                .map(|(cat, _)| cat.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Ok(format!(
                "List '{}' not found. Available lists: {available}",
                input.trim()
            ));
        }

        Ok(grouped
            .iter()
            .map(|(cat, cat_items)| render_group(cat, cat_items))
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

// ── todo_add ──────────────────────────────────────────────────────────────

pub struct TodoAddTool {
    store: Arc<TodoStore>,
}

impl TodoAddTool {
    pub fn definition(store: Arc<TodoStore>) -> ToolDefinition {
        ToolDefinition {
            name: "todo_add".into(),
            description:
                "Add tasks to a list. List is created automatically if it does not exist.".into(),
            parameter_description:
                "ListName | task1 | task2 (or just: task text for General)".into(),
            executor: Arc::new(Self { store }),
        }
    }
}

#[async_trait]
impl ToolExecutor for TodoAddTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let parts: Vec<&str> = input.split('|').map(str::trim).collect();

        if parts.len() == 1 {
            // No pipe: single task in General.
            let text = parts[0];
            if text.is_empty() {
                return Ok("Error: empty task.".into());
            }
            let item = self.store.add(text, "General").map_err(store_error)?;
            return Ok(format!("Added to 'General': [{}] {}", item.id, item.text));
        }

        // First part is the list name, the rest are tasks.
        let category = parts[0];
        let tasks: Vec<String> = parts[1..]
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.to_string())
            .collect();

        if category.is_empty() {
            return Ok("Error: empty list name.".into());
        }
        if tasks.is_empty() {
            return Ok("Error: no tasks provided.".into());
        }

        let added = self.store.bulk_add(&tasks, category).map_err(store_error)?;
        let lines = added
            .iter()
            .map(|i| format!("  [{}] {}", i.id, i.text))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(format!(
            "Added {} task(s) to '{category}':\n{lines}",
            added.len()
        ))
    }
}

// ── todo_delete ───────────────────────────────────────────────────────────

pub struct TodoDeleteTool {
    store: Arc<TodoStore>,
}

impl TodoDeleteTool {
    pub fn definition(store: Arc<TodoStore>) -> ToolDefinition {
        ToolDefinition {
            name: "todo_delete".into(),
            description: "Delete a task by its ID, or delete an entire list by its name.".into(),
            parameter_description: "task ID (e.g. a1b2c3d4) or list name (e.g. Shopping)".into(),
            executor: Arc::new(Self { store }),
        }
    }
}

#[async_trait]
impl ToolExecutor for TodoDeleteTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let target = input.trim();
        if target.is_empty() {
            return Ok("Error: specify a task ID or list name.".into());
        }

        // Try as task ID first.
        if self.store.delete_item(target).map_err(store_error)? {
            return Ok(format!("Deleted task '{target}'."));
        }

        // Then as list name.
        let count = self.store.delete_category(target).map_err(store_error)?;
        if count > 0 {
            return Ok(format!("Deleted list '{target}' ({count} task(s) removed)."));
        }

        Ok(format!("Nothing found with ID or list name '{target}'."))
    }
}

// ── todo_toggle ───────────────────────────────────────────────────────────

pub struct TodoToggleTool {
    store: Arc<TodoStore>,
}

impl TodoToggleTool {
    pub fn definition(store: Arc<TodoStore>) -> ToolDefinition {
        ToolDefinition {
            name: "todo_toggle".into(),
            description:
                "Toggle a task between pending and done. Use the task ID from todo_read.".into(),
            parameter_description: "task ID (e.g. a1b2c3d4)".into(),
            executor: Arc::new(Self { store }),
        }
    }
}

#[async_trait]
impl ToolExecutor for TodoToggleTool {
    async fn execute(&self, input: &str) -> Result<String, ToolError> {
        let item_id = input.trim();
        if item_id.is_empty() {
            return Ok("Error: specify a task ID.".into());
        }

        match self.store.toggle_status(item_id, None).map_err(store_error)? {
            None => Ok(format!("No task found with ID '{item_id}'.")),
            Some(item) => {
                let status = match item.status {
                    TodoStatus::Done => "done",
                    TodoStatus::Pending => "pending",
                };
                Ok(format!("Toggled [{}] {} -> {status}", item.id, item.text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (tempfile::TempDir, Arc<TodoStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(TodoStore::new(dir.path().join("todos.json")));
        (dir, store)
    }

    #[tokio::test]
    async fn read_empty_store() {
        let (_dir, store) = setup();
        let tool = TodoReadTool { store };
        let out = tool.execute("all").await.unwrap();
        assert_eq!(out, "No lists or tasks exist yet.");
    }

    #[tokio::test]
    async fn add_single_task_goes_to_general() {
        let (_dir, store) = setup();
        let tool = TodoAddTool { store: store.clone() };
        let out = tool.execute("Buy groceries").await.unwrap();
        assert!(out.starts_with("Added to 'General':"));
        assert!(out.contains("Buy groceries"));

        let all = store.get_all().unwrap();
        assert_eq!(all[0].category, "General");
    }

    #[tokio::test]
    async fn add_piped_tasks_to_named_list() {
        let (_dir, store) = setup();
        let tool = TodoAddTool { store: store.clone() };
        let out = tool
            .execute("Fitness | Run 5km | Do push-ups")
            .await
            .unwrap();
        assert!(out.starts_with("Added 2 task(s) to 'Fitness':"));

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|i| i.category == "Fitness"));
    }

    #[tokio::test]
    async fn add_rejects_empty_input() {
        let (_dir, store) = setup();
        let tool = TodoAddTool { store };
        assert_eq!(tool.execute("").await.unwrap(), "Error: empty task.");
        assert_eq!(
            tool.execute("| only pipes later").await.unwrap(),
            "Error: empty list name."
        );
        assert_eq!(
            tool.execute("List | |").await.unwrap(),
            "Error: no tasks provided."
        );
    }

    #[tokio::test]
    async fn read_specific_list_case_insensitive() {
        let (_dir, store) = setup();
        store.add("milk", "Shopping").unwrap();
        store.add("run", "Fitness").unwrap();

        let tool = TodoReadTool { store };
        let out = tool.execute("shopping").await.unwrap();
        assert!(out.starts_with("== Shopping =="));
        assert!(out.contains("milk"));
        assert!(!out.contains("run"));
    }

    #[tokio::test]
    async fn read_unknown_list_names_alternatives() {
        let (_dir, store) = setup();
        store.add("milk", "Shopping").unwrap();

        let tool = TodoReadTool { store };
        let out = tool.execute("Groceries").await.unwrap();
        assert!(out.starts_with("List 'Groceries' not found."));
        assert!(out.contains("Shopping"));
    }

    #[tokio::test]
    async fn read_all_renders_checkboxes() {
        let (_dir, store) = setup();
        let item = store.add("milk", "Shopping").unwrap();
        store.toggle_status(&item.id, Some(TodoStatus::Done)).unwrap();
        store.add("run", "Fitness").unwrap();

        let tool = TodoReadTool { store };
        let out = tool.execute("all").await.unwrap();
        assert!(out.contains(&format!("[x] {} | milk", item.id)));
        assert!(out.contains("[ ]"));
        assert!(out.contains("== Shopping =="));
        assert!(out.contains("== Fitness =="));
    }

    #[tokio::test]
    async fn delete_by_id_then_by_list() {
        let (_dir, store) = setup();
        let item = store.add("milk", "Shopping").unwrap();
        store.add("bread", "Shopping").unwrap();

        let tool = TodoDeleteTool { store };
        let out = tool.execute(&item.id).await.unwrap();
        assert_eq!(out, format!("Deleted task '{}'.", item.id));

        let out = tool.execute("Shopping").await.unwrap();
        assert_eq!(out, "Deleted list 'Shopping' (1 task(s) removed).");

        let out = tool.execute("Shopping").await.unwrap();
        assert_eq!(out, "Nothing found with ID or list name 'Shopping'.");
    }

    #[tokio::test]
    async fn toggle_reports_new_status() {
        let (_dir, store) = setup();
        let item = store.add("milk", "General").unwrap();

        let tool = TodoToggleTool { store };
        let out = tool.execute(&item.id).await.unwrap();
        assert_eq!(out, format!("Toggled [{}] milk -> done", item.id));

        let out = tool.execute("zzzzzzzz").await.unwrap();
        assert_eq!(out, "No task found with ID 'zzzzzzzz'.");
    }
}
