//! Configuration management for loratags.
//!
//! Configuration is loaded from the platform config directory
//! (`.../loratags/config.toml`) with sensible defaults. Every section is
//! `#[serde(default)]`, so a partial file only overrides what it names.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Tag cache settings
    pub cache: CacheConfig,

    /// Remote lookup settings
    pub provider: ProviderConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.loratags.loratags/config.toml
    /// - Linux: ~/.config/loratags/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\loratags\config\config.toml
    ///
    /// Falls back to ~/.loratags/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "loratags", "loratags")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".loratags").join("config.toml")
            })
    }

    /// Get the resolved LoRA directory (with ~ expansion).
    pub fn lora_dir(&self) -> PathBuf {
        expand(&self.general.lora_dir)
    }

    /// Get the resolved tag cache file path (with ~ expansion).
    pub fn cache_path(&self) -> PathBuf {
        expand(&self.cache.path)
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

fn expand(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::tilde(&path_str);
    PathBuf::from(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cache.path, PathBuf::from("./loras_tags.json"));
        assert_eq!(config.provider.endpoint, "https://civitai.com/api/v1");
        assert_eq!(config.provider.timeout_ms, 30_000);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[general]"));
        assert!(toml.contains("[cache]"));
        assert!(toml.contains("[provider]"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[cache]\npath = \"/tmp/tags.json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.cache_path(), PathBuf::from("/tmp/tags.json"));
        assert_eq!(config.provider.timeout_ms, 30_000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\ntimeout_ms = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("timeout_ms"));
    }

    #[test]
    fn test_lora_dir_expands_tilde() {
        let config = Config::default();
        assert!(!config.lora_dir().to_string_lossy().starts_with('~'));
    }
}
