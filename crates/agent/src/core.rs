//! AgentCore: top-level facade that wires everything together.
//!
//! Constructs and owns all sub-components. Frontends (the CLI today)
//! talk to this type only and never instantiate the client, the memory
//! manager, or the stores directly. Every collaborator is passed in
//! through constructors, so swapping a store for a fake in tests is
//! ordinary dependency injection.

use crate::proactivity::ProactivityEngine;
use crate::prompts::build_system_prompt;
use crate::reasoning::{AgentResponse, ReasoningLoop, ThoughtStep};
use openclaw_config::AppSettings;
use openclaw_core::error::{MemoryError, ProviderError, StoreError};
use openclaw_core::memory::{LongTermMemory, MemoryRecord, MemoryResult};
use openclaw_core::message::Message;
use openclaw_core::provider::ChatClient;
use openclaw_core::tool::ToolRegistry;
use openclaw_memory::{FileStore, MemoryManager, ShortTermMemory};
use openclaw_providers::OllamaClient;
use openclaw_store::{TodoItem, TodoStore};
use openclaw_tools::default_registry;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct AgentCore {
    settings: AppSettings,
    client: Arc<OllamaClient>,
    todo_store: Arc<TodoStore>,
    memory: MemoryManager,
    tools: Arc<ToolRegistry>,
    reasoner: ReasoningLoop,
    proactivity: ProactivityEngine,
    last_trace: Vec<ThoughtStep>,
}

impl AgentCore {
    /// Build the full agent using the default data directory.
    pub fn new(settings: AppSettings) -> Self {
        Self::with_data_dir(settings, &openclaw_config::data_dir())
    }

    /// Build the full agent with all persistence rooted at `data_dir`.
    pub fn with_data_dir(settings: AppSettings, data_dir: &Path) -> Self {
        let client = Arc::new(OllamaClient::new(&settings.ollama));
        let todo_store = Arc::new(TodoStore::new(data_dir.join("todos.json")));
        let long_term: Arc<dyn LongTermMemory> =
            Arc::new(FileStore::new(data_dir.join("memory").join("records.jsonl")));

        let stm = ShortTermMemory::new(settings.ollama.context_window);
        let memory = MemoryManager::new(stm, long_term.clone());

        let tools = Arc::new(default_registry(todo_store.clone(), long_term));
        let reasoner = ReasoningLoop::new(client.clone(), tools.clone());
        let proactivity = ProactivityEngine::new(todo_store.clone());

        let mut core = Self {
            settings,
            client,
            todo_store,
            memory,
            tools,
            reasoner,
            proactivity,
            last_trace: Vec::new(),
        };
        core.refresh_system_prompt();
        info!(model = %core.settings.ollama.model, "agent core initialized");
        core
    }

    // ── message handling ──

    /// Process a user message through the full pipeline.
    pub async fn handle_message(&mut self, user_input: &str) -> Result<AgentResponse, ProviderError> {
        self.refresh_system_prompt();
        let response = self.reasoner.run(&mut self.memory, user_input).await?;
        self.last_trace = response.trace.clone();
        Ok(response)
    }

    // ── proactivity ──

    /// Check the startup and task-update triggers, in that order.
    pub fn proactive_message(&mut self) -> Option<String> {
        self.proactivity
            .check_on_startup()
            .or_else(|| self.proactivity.check_after_task_update())
    }

    // ── inspection ──

    /// Raw short-term memory contents.
    pub fn working_memory(&self) -> Vec<Message> {
        self.memory.working_memory()
    }

    /// All long-term memory records.
    pub async fn long_term_records(&self) -> Result<Vec<MemoryRecord>, MemoryError> {
        self.memory.long_term_records().await
    }

    /// Search long-term memory.
    pub async fn query_long_term(&self, query: &str, limit: usize) -> Vec<MemoryResult> {
        self.memory.recall(query, limit).await
    }

    /// The reasoning trace of the most recent turn.
    pub fn last_trace(&self) -> &[ThoughtStep] {
        &self.last_trace
    }

    /// All to-do items.
    pub fn todos(&self) -> Result<Vec<TodoItem>, StoreError> {
        self.todo_store.get_all()
    }

    /// Delete a long-term memory record by ID. Returns false if unknown.
    pub async fn delete_memory(&self, id: &str) -> Result<bool, MemoryError> {
        self.memory.delete_long_term(id).await
    }

    // ── settings ──

    /// Hot-reload persona and model settings without losing memory.
    pub fn reload_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
        self.client = Arc::new(OllamaClient::new(&self.settings.ollama));
        self.reasoner = ReasoningLoop::new(self.client.clone(), self.tools.clone());
        self.refresh_system_prompt();
        info!(model = %self.settings.ollama.model, "settings reloaded");
    }

    /// True if the configured model backend is reachable.
    pub async fn health_check(&self) -> bool {
        self.client.health_check().await
    }

    /// Names of the models the backend offers.
    pub async fn list_models(&self) -> Result<Vec<String>, ProviderError> {
        self.client.list_models().await
    }

    // ── internal ──

    fn refresh_system_prompt(&mut self) {
        let prompt = build_system_prompt(
            &self.settings.persona,
            &self.settings.user,
            &self.tools.describe(),
        );
        self.memory.set_system(prompt);
    }
}
