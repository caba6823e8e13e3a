//! Built-in tool implementations for OpenClaw.
//!
//! Each tool is a small struct holding `Arc` references to the
//! collaborators it needs, assembled once at startup and handed to the
//! registry. No tool reaches for shared mutable globals — substituting a
//! fake store or memory in tests is plain constructor injection.

pub mod memory_tool;
pub mod search;
pub mod todo;

use openclaw_core::memory::LongTermMemory;
use openclaw_core::tool::ToolRegistry;
use openclaw_store::TodoStore;
use std::sync::Arc;

pub use memory_tool::SaveMemoryTool;
pub use search::SearchInternetTool;
pub use todo::{TodoAddTool, TodoDeleteTool, TodoReadTool, TodoToggleTool};

/// Create the default tool registry with all built-in tools, wired to the
/// given collaborators.
pub fn default_registry(
    todo_store: Arc<TodoStore>,
    long_term: Arc<dyn LongTermMemory>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(search::SearchInternetTool::definition());
    registry.register(todo::TodoReadTool::definition(todo_store.clone()));
    registry.register(todo::TodoAddTool::definition(todo_store.clone()));
    registry.register(todo::TodoDeleteTool::definition(todo_store.clone()));
    registry.register(todo::TodoToggleTool::definition(todo_store));
    registry.register(memory_tool::SaveMemoryTool::definition(long_term));
    registry
}
