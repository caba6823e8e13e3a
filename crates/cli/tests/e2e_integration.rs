//! End-to-end tests across the crate boundaries: tools driving the to-do
//! store, memory persistence, context assembly, and proactivity — the whole
//! pipeline minus the model itself.

use openclaw_agent::ProactivityEngine;
use openclaw_core::message::Role;
use openclaw_core::LongTermMemory;
use openclaw_memory::{FileStore, MemoryManager, ShortTermMemory};
use openclaw_store::TodoStore;
use openclaw_tools::default_registry;
use std::sync::Arc;

fn todo_store(dir: &tempfile::TempDir) -> Arc<TodoStore> {
    Arc::new(TodoStore::new(dir.path().join("todos.json")))
}

#[tokio::test]
async fn e2e_todo_lifecycle_through_the_tool_interface() {
    let dir = tempfile::tempdir().unwrap();
    let store = todo_store(&dir);
    let long_term: Arc<dyn LongTermMemory> =
        Arc::new(FileStore::new(dir.path().join("records.jsonl")));
    let registry = default_registry(store.clone(), long_term);

    let run = |name: &str, input: &str| {
        let tool = registry.get(name).unwrap().executor.clone();
        let input = input.to_string();
        async move { tool.execute(&input).await.unwrap() }
    };

    // Add two tasks to a named list.
    let reply = run("todo_add", "Fitness | Run 5km | Do push-ups").await;
    assert!(reply.starts_with("Added 2 task(s) to 'Fitness':"));

    // Read them back grouped under the list header.
    let listing = run("todo_read", "all").await;
    assert!(listing.contains("== Fitness =="));
    assert!(listing.contains("Run 5km"));

    // Toggle the first task via the ID shown by todo_read.
    let id = store.get_all().unwrap()[0].id.clone();
    let reply = run("todo_toggle", &id).await;
    assert!(reply.ends_with("-> done"));

    // Delete the whole list.
    let reply = run("todo_delete", "Fitness").await;
    assert_eq!(reply, "Deleted list 'Fitness' (2 task(s) removed).");
    assert_eq!(run("todo_read", "all").await, "No lists or tasks exist yet.");
}

#[tokio::test]
async fn e2e_saved_memory_reaches_the_next_context() {
    let dir = tempfile::tempdir().unwrap();
    let store = todo_store(&dir);
    let long_term: Arc<dyn LongTermMemory> =
        Arc::new(FileStore::new(dir.path().join("records.jsonl")));
    let registry = default_registry(store, long_term.clone());

    // A turn saves a fact through the tool.
    let save = registry.get("save_memory").unwrap().executor.clone();
    let reply = save.execute("The user's dog is called Pixel").await.unwrap();
    assert!(reply.starts_with("Saved to memory (id="));

    // The next turn's context recalls it.
    let mut memory = MemoryManager::new(ShortTermMemory::new(4096), long_term);
    memory.set_system("You are Claw.");
    memory.add_message(Role::User, "what is the user's dog called");

    let context = memory
        .build_context(Some("what is the user's dog called"))
        .await;
    let recalled = &context[1];
    assert_eq!(recalled.role, Role::System);
    assert!(recalled.content.contains("Recalled facts"));
    assert!(recalled.content.contains("Pixel"));
}

#[tokio::test]
async fn e2e_memory_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.jsonl");

    {
        let store = FileStore::new(path.clone());
        store
            .store("prefers tea over coffee", serde_json::Map::new())
            .await
            .unwrap();
    }

    let reopened = FileStore::new(path);
    let results = reopened.query("tea over coffee", 5).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].text, "prefers tea over coffee");
}

#[tokio::test]
async fn e2e_tool_added_tasks_trigger_proactivity() {
    let dir = tempfile::tempdir().unwrap();
    let store = todo_store(&dir);
    let long_term: Arc<dyn LongTermMemory> =
        Arc::new(FileStore::new(dir.path().join("records.jsonl")));
    let registry = default_registry(store.clone(), long_term);

    let add = registry.get("todo_add").unwrap().executor.clone();
    add.execute("Errands | find a plumber").await.unwrap();

    let mut engine = ProactivityEngine::new(store);
    let startup = engine.check_on_startup().unwrap();
    assert_eq!(
        startup,
        "I see you have an unfinished task: \"find a plumber\". Want me to work on it?"
    );

    // "find" is an actionable keyword, so the update check offers to act.
    let nudge = engine.check_after_task_update().unwrap();
    assert!(nudge.contains("find a plumber"));
    assert!(nudge.ends_with("Shall I do it now?"));
}
