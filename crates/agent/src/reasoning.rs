//! The ReAct-style reasoning loop: Think -> Act -> Observe -> repeat.
//!
//! Per user turn the loop works on a scratchpad copy of the context.
//! Short-term memory receives exactly two writes: the user's message on
//! entry and the final answer on exit. Intermediate tool chatter (raw
//! model output, observations, continuation directives) lives only in the
//! scratchpad and is dropped when the turn ends.
//!
//! Tool failures are observations, not errors — the model sees them and
//! decides what to do next. The only error that escapes `run` is a
//! provider transport failure, which makes the whole turn impossible.

use crate::parser::parse_model_reply;
use openclaw_core::error::ProviderError;
use openclaw_core::message::{Message, Role};
use openclaw_core::provider::ChatClient;
use openclaw_core::tool::ToolRegistry;
use openclaw_memory::MemoryManager;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default iteration cap per user turn.
const MAX_ITERATIONS: u32 = 5;

/// One iteration of the reasoning loop, kept for the debug trace.
#[derive(Debug, Clone)]
pub struct ThoughtStep {
    /// 1-based iteration number.
    pub iteration: u32,
    pub thought: String,
    pub action: Option<String>,
    pub action_input: Option<String>,
    /// Tool output (or synthesized error text). `None` on the final step.
    pub observation: Option<String>,
}

/// Final result of one user turn.
#[derive(Debug, Clone)]
pub struct AgentResponse {
    pub answer: String,
    pub trace: Vec<ThoughtStep>,
}

/// Executes the Think-Act-Observe cycle with a configurable iteration cap.
pub struct ReasoningLoop {
    client: Arc<dyn ChatClient>,
    tools: Arc<ToolRegistry>,
    max_iterations: u32,
}

impl ReasoningLoop {
    pub fn new(client: Arc<dyn ChatClient>, tools: Arc<ToolRegistry>) -> Self {
        Self {
            client,
            tools,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Override the iteration cap.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Run one full user turn and return the agent's final answer.
    pub async fn run(
        &self,
        memory: &mut MemoryManager,
        user_input: &str,
    ) -> Result<AgentResponse, ProviderError> {
        memory.add_message(Role::User, user_input);

        // Scratchpad: system prompt + recalled facts + conversation so far.
        let mut messages = memory.build_context(Some(user_input)).await;
        let mut trace: Vec<ThoughtStep> = Vec::new();

        for iteration in 1..=self.max_iterations {
            let raw = self.client.chat(&messages, true).await?;
            let reply = parse_model_reply(&raw);
            debug!(
                iteration,
                action = reply.action.as_deref().unwrap_or("-"),
                "model reply parsed"
            );

            let mut step = ThoughtStep {
                iteration,
                thought: reply.thought.clone(),
                action: reply.action.clone(),
                action_input: reply.action_input.clone(),
                observation: None,
            };

            // The model is answering directly.
            if reply.is_final() {
                let answer = reply.answer.unwrap_or_else(|| raw.clone());
                trace.push(step);
                memory.add_message(Role::Assistant, answer.clone());
                info!(iterations = iteration, "turn finished");
                return Ok(AgentResponse { answer, trace });
            }

            // The model wants a tool.
            let action = reply.action.unwrap_or_default();
            let observation = match self.tools.get(&action) {
                None => {
                    warn!(tool = %action, "model requested unknown tool");
                    format!("Error: unknown tool '{action}'.")
                }
                Some(tool) => {
                    let input = reply.action_input.as_deref().unwrap_or("");
                    match tool.executor.execute(input).await {
                        Ok(output) => output,
                        Err(e) => {
                            warn!(tool = %action, error = %e, "tool execution failed");
                            format!("Tool error: {e}")
                        }
                    }
                }
            };

            step.observation = Some(observation.clone());
            trace.push(step);

            // Feed the observation back so the model can continue.
            messages.push(Message::assistant(raw));
            messages.push(Message::user(format!(
                "Tool '{action}' returned this result:\n\
                 ---\n{observation}\n---\n\
                 Now respond with a JSON object. \
                 If the result answers the question, set action to null and put your answer \
                 (based on the result above) in the answer field. \
                 If you need another tool, call it."
            )));
        }

        // Iteration cap reached without a final answer.
        warn!(cap = self.max_iterations, "iteration cap exhausted");
        let fallback = "I was unable to complete the request within the allowed steps.";
        memory.add_message(Role::Assistant, fallback);
        Ok(AgentResponse {
            answer: fallback.into(),
            trace,
        })
    }
}
