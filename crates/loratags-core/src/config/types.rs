//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Root directory that LoRA names are resolved against
    pub lora_dir: PathBuf,

    /// File extensions listed as LoRA assets
    pub supported_extensions: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            lora_dir: PathBuf::from("~/ComfyUI/models/loras"),
            supported_extensions: vec![
                "safetensors".to_string(),
                "ckpt".to_string(),
                "pt".to_string(),
                "pth".to_string(),
                "bin".to_string(),
            ],
        }
    }
}

/// Tag cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// JSON document mapping LoRA names to their trained words.
    /// Relative paths resolve against the working directory.
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./loras_tags.json"),
        }
    }
}

/// Remote lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API base URL; `/model-versions/by-hash/{hash}` is appended
    pub endpoint: String,

    /// Optional API key (supports ${ENV_VAR} syntax). Lookups work anonymously.
    pub api_key: String,

    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://civitai.com/api/v1".to_string(),
            api_key: "${CIVITAI_API_KEY}".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
