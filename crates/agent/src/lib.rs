//! The OpenClaw agent: reasoning loop, prompt assembly, proactivity, and
//! the [`AgentCore`] facade that frontends talk to.

pub mod core;
pub mod parser;
pub mod proactivity;
pub mod prompts;
pub mod reasoning;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::core::AgentCore;
pub use parser::{ModelReply, parse_model_reply};
pub use proactivity::ProactivityEngine;
pub use prompts::build_system_prompt;
pub use reasoning::{AgentResponse, ReasoningLoop, ThoughtStep};
