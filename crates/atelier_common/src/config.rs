//! Studio configuration
//!
//! Loaded from `<config_dir>/atelier/config.toml` when present, with the
//! `GEMINI_API_KEY` environment variable taking precedence for the key.
//! Everything has a serde default so a partial file is fine; a missing file
//! just means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "atelier";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the generation service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Generation service API key. Env var overrides the file.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StudioConfig {
    /// Path of the user config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load file config (if any) and apply the environment override.
    pub fn load() -> Self {
        let mut config = Self::path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|raw| match toml::from_str::<Self>(&raw) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!("ignoring malformed config.toml: {e}");
                    None
                }
            })
            .unwrap_or_default();

        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    /// Key with all but a short prefix masked, for `config` display.
    pub fn redacted_key(&self) -> String {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if key.chars().count() > 8 => {
                let prefix: String = key.chars().take(8).collect();
                format!("{prefix}…")
            }
            Some(key) if !key.is_empty() => "set".to_string(),
            _ => "not set".to_string(),
        }
    }
}
