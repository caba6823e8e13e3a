//! Tool abstractions — named capabilities the model may invoke.
//!
//! A tool is a text-in/text-out capability. The model names a tool and
//! supplies a plain-string `action_input`; the executor returns a textual
//! observation. The reasoning loop treats executors as fallible and absorbs
//! every failure, so implementations are free to return errors.

use crate::error::ToolError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

/// The executor side of a tool: a total text → text capability from the
/// loop's point of view (any `Err` it returns is converted into an
/// error-marked observation by the caller, never propagated).
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    async fn execute(&self, input: &str) -> std::result::Result<String, ToolError>;
}

/// Description of a single tool the agent can invoke.
#[derive(Clone)]
pub struct ToolDefinition {
    /// Unique name the model uses in the `action` field.
    pub name: String,

    /// What this tool does (rendered into the system prompt).
    pub description: String,

    /// Human-readable description of the expected `action_input`.
    pub parameter_description: String,

    /// The capability itself.
    pub executor: Arc<dyn ToolExecutor>,
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameter_description", &self.parameter_description)
            .finish_non_exhaustive()
    }
}

/// A registry of available tools, keyed by name.
///
/// `list()` and `describe()` preserve registration order: the rendered
/// description is embedded verbatim in the system prompt, so it must be
/// deterministic for the same registration sequence. Re-registering a name
/// overwrites the definition in place (last write wins, position kept).
pub struct ToolRegistry {
    order: Vec<String>,
    tools: HashMap<String, ToolDefinition>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            tools: HashMap::new(),
        }
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: ToolDefinition) {
        if !self.tools.contains_key(&tool.name) {
            self.order.push(tool.name.clone());
        }
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// Return all registered tools in registration order.
    pub fn list(&self) -> Vec<&ToolDefinition> {
        self.order
            .iter()
            .filter_map(|name| self.tools.get(name))
            .collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Format all tools for injection into the system prompt, one line per
    /// tool, in registration order.
    pub fn describe(&self) -> String {
        self.list()
            .iter()
            .map(|t| {
                format!(
                    "- {}: {} (action_input: {})",
                    t.name, t.description, t.parameter_description
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A simple test tool for unit tests.
    struct EchoExecutor;

    #[async_trait]
    impl ToolExecutor for EchoExecutor {
        async fn execute(&self, input: &str) -> Result<String, ToolError> {
            Ok(input.to_string())
        }
    }

    fn echo_tool(name: &str, description: &str) -> ToolDefinition {
        ToolDefinition {
            name: name.into(),
            description: description.into(),
            parameter_description: "text to echo".into(),
            executor: Arc::new(EchoExecutor),
        }
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo", "Echoes back the input"));
        assert!(registry.get("echo").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn list_preserves_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("zulu", "Z tool"));
        registry.register(echo_tool("alpha", "A tool"));
        registry.register(echo_tool("mike", "M tool"));

        let names: Vec<&str> = registry.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn reregister_overwrites_in_place() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("first", "original"));
        registry.register(echo_tool("second", "other"));
        registry.register(echo_tool("first", "replacement"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("first").unwrap().description, "replacement");
        // Position is stable across overwrite.
        let names: Vec<&str> = registry.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn describe_renders_one_line_per_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo", "Echoes back the input"));
        registry.register(echo_tool("shout", "Echoes louder"));

        let description = registry.describe();
        assert_eq!(
            description,
            "- echo: Echoes back the input (action_input: text to echo)\n\
             - shout: Echoes louder (action_input: text to echo)"
        );
    }

    #[test]
    fn describe_is_deterministic() {
        let build = || {
            let mut registry = ToolRegistry::new();
            registry.register(echo_tool("b", "B"));
            registry.register(echo_tool("a", "A"));
            registry.describe()
        };
        assert_eq!(build(), build());
    }

    #[tokio::test]
    async fn executor_runs() {
        let mut registry = ToolRegistry::new();
        registry.register(echo_tool("echo", "Echoes back the input"));

        let tool = registry.get("echo").unwrap();
        let out = tool.executor.execute("hello world").await.unwrap();
        assert_eq!(out, "hello world");
    }
}
