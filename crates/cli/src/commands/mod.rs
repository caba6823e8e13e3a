//! CLI command implementations.

pub mod chat;
pub mod memory;
pub mod status;
pub mod todo;

use anyhow::Context;
use openclaw_config::AppSettings;

/// Load settings from the default path (missing file yields defaults).
pub(crate) fn load_settings() -> anyhow::Result<AppSettings> {
    AppSettings::load(&openclaw_config::default_settings_path())
        .context("Failed to load settings")
}
