//! Short-term memory — the sliding window of the active conversation.
//!
//! Keeps the most recent messages within an approximate token budget. The
//! system message is always preserved at index 0; the oldest non-system
//! message is evicted first when the budget is exceeded.
//!
//! Two rules interact here, and their priority matters:
//! - the token budget is a **soft ceiling**, and
//! - the minimum number of retained user turns is a **hard floor**.
//!
//! When they conflict, the floor wins: trimming refuses to drop below
//! [`ShortTermMemory::MIN_KEEP_USERS`] user messages even while over budget.
//!
//! Eviction removes the single oldest non-system message regardless of its
//! role, so user/assistant pairing can drift apart over many trims. That is
//! intentional and relied upon by callers inspecting the window; do not
//! replace it with pairwise eviction.

use crate::token::estimate_tokens;
use openclaw_core::message::{Message, Role};

/// A token-budgeted, ordered message window.
#[derive(Debug, Clone)]
pub struct ShortTermMemory {
    messages: Vec<Message>,
    max_tokens: usize,
    min_keep_users: usize,
}

impl ShortTermMemory {
    /// Minimum number of user messages retained regardless of budget.
    pub const MIN_KEEP_USERS: usize = 2;

    /// Create a window with the given token budget.
    pub fn new(max_tokens: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_tokens,
            min_keep_users: Self::MIN_KEEP_USERS,
        }
    }

    /// Override the retained-user-turn floor (tests mostly).
    pub fn with_min_keep_users(mut self, min: usize) -> Self {
        self.min_keep_users = min;
        self
    }

    /// Set or replace the system message (always index 0).
    ///
    /// Idempotent: calling twice leaves exactly one system message holding
    /// the latest content.
    pub fn set_system(&mut self, content: impl Into<String>) {
        let message = Message::system(content);
        match self.messages.first() {
            Some(first) if first.role == Role::System => self.messages[0] = message,
            _ => self.messages.insert(0, message),
        }
    }

    /// Append a message and trim if over budget.
    pub fn add(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
        self.trim();
    }

    /// Approximate total tokens across all messages.
    pub fn token_count(&self) -> usize {
        self.messages
            .iter()
            .map(|m| estimate_tokens(&m.content))
            .sum()
    }

    /// Return an independent copy of the current message list.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Number of messages in the window (system included).
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the window holds no messages at all.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Remove all messages except the system message, if present.
    pub fn clear(&mut self) {
        self.messages
            .retain(|m| m.role == Role::System);
    }

    fn user_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    /// Remove oldest non-system messages until within budget, refusing to
    /// reduce the retained user-message count below the floor.
    fn trim(&mut self) {
        while self.token_count() > self.max_tokens {
            if self.user_count() <= self.min_keep_users {
                break; // budget violation tolerated over losing the floor
            }
            let Some(oldest) = self
                .messages
                .iter()
                .position(|m| m.role != Role::System)
            else {
                break;
            };
            self.messages.remove(oldest);
        }
    }
}
