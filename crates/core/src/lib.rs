//! # OpenClaw Core
//!
//! Domain types, traits, and error definitions for the OpenClaw assistant.
//! This crate has **zero framework dependencies** — it defines the domain
//! model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator (chat client, long-term memory, tools) is defined as a
//! trait here. Implementations live in their respective crates. This enables:
//! - Swapping implementations via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod memory;
pub mod message;
pub mod provider;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use error::{Error, MemoryError, ProviderError, Result, StoreError, ToolError};
pub use memory::{LongTermMemory, MemoryRecord, MemoryResult};
pub use message::{Message, Role};
pub use provider::ChatClient;
pub use tool::{ToolDefinition, ToolExecutor, ToolRegistry};
