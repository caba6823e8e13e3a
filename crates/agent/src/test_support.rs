//! Scripted chat client for loop tests.

use async_trait::async_trait;
use openclaw_core::error::ProviderError;
use openclaw_core::message::Message;
use openclaw_core::provider::ChatClient;
use std::sync::Mutex;

/// A [`ChatClient`] that replays a fixed script of replies, one per call,
/// and records the message list of every call for assertions.
pub(crate) struct SequentialMockClient {
    script: Mutex<Vec<Result<String, ProviderError>>>,
    seen: Mutex<Vec<Vec<Message>>>,
}

impl SequentialMockClient {
    pub(crate) fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        let mut script = script;
        script.reverse();
        Self {
            script: Mutex::new(script),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Number of chat calls made so far.
    pub(crate) fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    /// The message list the n-th call (0-based) was invoked with.
    pub(crate) fn messages_of_call(&self, n: usize) -> Vec<Message> {
        self.seen.lock().unwrap()[n].clone()
    }
}

#[async_trait]
impl ChatClient for SequentialMockClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn chat(
        &self,
        messages: &[Message],
        _json_mode: bool,
    ) -> Result<String, ProviderError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        self.script
            .lock()
            .unwrap()
            .pop()
            .expect("mock script exhausted: more chat calls than scripted replies")
    }
}
