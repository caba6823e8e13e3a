//! Settings loading and management for OpenClaw.
//!
//! Loads settings from `~/.openclaw/settings.toml` with environment
//! variable overrides. A missing file yields defaults, so a fresh install
//! works without any configuration step.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Basic information about the human user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_user_name")]
    pub name: String,

    /// Free-form background the agent should know about the user.
    #[serde(default)]
    pub info: String,
}

fn default_user_name() -> String {
    "User".into()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            info: String::new(),
        }
    }
}

/// Controls the agent's character and behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPersona {
    #[serde(default = "default_persona_name")]
    pub name: String,

    #[serde(default = "default_persona_role")]
    pub role: String,

    /// Extra instructions appended to the system prompt.
    #[serde(default)]
    pub system_instructions: String,
}

fn default_persona_name() -> String {
    "Claw".into()
}
fn default_persona_role() -> String {
    "Personal Assistant".into()
}

impl Default for AgentPersona {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            role: default_persona_role(),
            system_instructions: String::new(),
        }
    }
}

/// Connection and generation parameters for Ollama.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Token budget for the short-term conversation window.
    #[serde(default = "default_context_window")]
    pub context_window: usize,
}

fn default_base_url() -> String {
    "http://localhost:11434".into()
}
fn default_model() -> String {
    "phi4-mini".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_context_window() -> usize {
    4096
}

impl Default for OllamaSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            context_window: default_context_window(),
        }
    }
}

/// Top-level container for all application settings.
///
/// Maps directly to `~/.openclaw/settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub user: UserProfile,

    #[serde(default)]
    pub persona: AgentPersona,

    #[serde(default)]
    pub ollama: OllamaSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid settings file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Default data directory: `~/.openclaw`.
pub fn data_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".openclaw")
}

/// Default settings file path: `~/.openclaw/settings.toml`.
pub fn default_settings_path() -> PathBuf {
    data_dir().join("settings.toml")
}

impl AppSettings {
    /// Load settings from the given path, returning defaults if the file is
    /// missing. Environment overrides are applied afterwards.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            debug!(path = %path.display(), "Settings file missing, using defaults");
            Self::default()
        };
        settings.apply_env_overrides();
        Ok(settings)
    }

    /// Persist settings to the given path as TOML.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self).expect("settings always serialize");
        std::fs::write(path, raw).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `OPENCLAW_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("OPENCLAW_OLLAMA_URL") {
            self.ollama.base_url = url;
        }
        if let Ok(model) = std::env::var("OPENCLAW_MODEL") {
            self.ollama.model = model;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = AppSettings::default();
        assert_eq!(settings.persona.name, "Claw");
        assert_eq!(settings.ollama.model, "phi4-mini");
        assert_eq!(settings.ollama.context_window, 4096);
        assert!((settings.ollama.temperature - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let settings = AppSettings::load(&path).unwrap();
        assert_eq!(settings.user.name, "User");
    }

    #[test]
    fn save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = AppSettings::default();
        settings.user.name = "Ada".into();
        settings.persona.system_instructions = "Be brief.".into();
        settings.save(&path).unwrap();

        let reloaded = AppSettings::load(&path).unwrap();
        assert_eq!(reloaded.user.name, "Ada");
        assert_eq!(reloaded.persona.system_instructions, "Be brief.");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[ollama]\nmodel = \"llama3\"\n").unwrap();

        let settings = AppSettings::load(&path).unwrap();
        assert_eq!(settings.ollama.model, "llama3");
        assert_eq!(settings.ollama.base_url, "http://localhost:11434");
        assert_eq!(settings.persona.name, "Claw");
    }
}
