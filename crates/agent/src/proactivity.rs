//! Proactive suggestions derived from the to-do list.
//!
//! Two triggers: a one-shot check at session start (unfinished tasks) and
//! a per-mutation check that scans pending tasks for keywords suggesting
//! the agent could act on them itself.

use openclaw_store::TodoStore;
use std::sync::Arc;
use tracing::warn;

/// Keywords that hint a task is actionable via tools.
const ACTIONABLE_KEYWORDS: [&str; 6] = ["find", "search", "check", "look up", "get", "fetch"];

/// Generates proactive messages based on the agent's current state.
pub struct ProactivityEngine {
    store: Arc<TodoStore>,
    startup_checked: bool,
}

impl ProactivityEngine {
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self {
            store,
            startup_checked: false,
        }
    }

    /// Called once per session. Returns a message if there are pending
    /// tasks; every later call returns `None`.
    pub fn check_on_startup(&mut self) -> Option<String> {
        if self.startup_checked {
            return None;
        }
        self.startup_checked = true;

        let pending = match self.store.get_pending() {
            Ok(pending) => pending,
            Err(e) => {
                warn!(error = %e, "could not read to-do store for startup check");
                return None;
            }
        };
        match pending.as_slice() {
            [] => None,
            [only] => Some(format!(
                "I see you have an unfinished task: \"{}\". Want me to work on it?",
                only.text
            )),
            many => Some(format!(
                "I see you have {} unfinished tasks. Want me to help with one of them?",
                many.len()
            )),
        }
    }

    /// Called after a to-do mutation. Suggests acting on the first pending
    /// task whose text contains an actionable keyword.
    pub fn check_after_task_update(&self) -> Option<String> {
        let pending = match self.store.get_pending() {
            Ok(pending) => pending,
            Err(e) => {
                warn!(error = %e, "could not read to-do store for task-update check");
                return None;
            }
        };

        pending.iter().find_map(|task| {
            let text = task.text.to_lowercase();
            ACTIONABLE_KEYWORDS
                .iter()
                .any(|kw| text.contains(kw))
                .then(|| {
                    format!(
                        "I notice the task \"{}\" looks like something I can help with. Shall I do it now?",
                        task.text
                    )
                })
        })
    }
}
