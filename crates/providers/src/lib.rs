//! LLM client implementations for OpenClaw.
//!
//! All clients implement the `openclaw_core::ChatClient` trait.

pub mod ollama;

pub use ollama::OllamaClient;
