// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::WellmateError;
use crate::infra::paths;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const DEFAULT_GREETING: &str =
    "Hello! I'm Dr. Black, a physician with 30 years of experience. How may I help you today? 😊";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Per-request timeout. Unset means requests wait indefinitely.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.into(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub greeting: String,
    pub assistant_name: String,
    pub assistant_avatar: String,
    pub user_avatar: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.into(),
            assistant_name: "Dr. Black".into(),
            assistant_avatar: "/static/cropped_image.webp".into(),
            user_avatar: "/static/user_avatar_placeholder.png".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Session store location (defaults to `<data dir>/wellmate.db`)
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> Result<Self, WellmateError> {
        let path = paths::config_file_path();
        let config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.with_env_overrides()
    }

    pub fn load_from(path: &Path) -> Result<Self, WellmateError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| WellmateError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `WELLMATE_API_URL` on top of the file values.
    pub fn with_env_overrides(mut self) -> Result<Self, WellmateError> {
        if let Ok(url) = std::env::var("WELLMATE_API_URL") {
            if !url.trim().is_empty() {
                self.server.base_url = url.trim().to_string();
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), WellmateError> {
        let url = url::Url::parse(&self.server.base_url).map_err(|e| {
            WellmateError::Config(format!("invalid server.base_url '{}': {e}", self.server.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(WellmateError::Config(format!(
                "server.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(())
    }

    /// Resolved session store path.
    pub fn store_path(&self) -> std::path::PathBuf {
        match &self.storage.path {
            Some(p) => std::path::PathBuf::from(p),
            None => paths::db_path(),
        }
    }
}
