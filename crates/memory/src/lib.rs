//! Memory system for OpenClaw.
//!
//! Two tiers, deliberately kept apart:
//! - **Short-term memory** ([`ShortTermMemory`]): a token-budgeted window of
//!   user-visible conversation turns.
//! - **Long-term memory** (`openclaw_core::LongTermMemory` implementations):
//!   persisted facts recalled semantically per turn.
//!
//! The [`MemoryManager`] composes both into the single context list sent to
//! the model. Intra-turn tool chatter never enters either tier — it lives in
//! the reasoning loop's transient scratchpad.

pub mod file;
pub mod in_memory;
pub mod manager;
mod score;
pub mod short_term;
pub mod token;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use manager::MemoryManager;
pub use short_term::ShortTermMemory;
