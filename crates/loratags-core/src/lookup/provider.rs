//! Tag provider trait and the lookup response schema.

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The parts of a model-version record that the pipeline reads.
///
/// Unknown fields are ignored. `trained_words` stays `None` when the field is
/// absent or null, which is distinct from an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersionInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model: Option<String>,

    /// Trigger words the LoRA was trained with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trained_words: Option<Vec<String>>,
}

/// A remote source of model-version records keyed by SHA-256.
///
/// Uses `async_trait` so the pipeline can hold a `Box<dyn TagProvider>`.
#[async_trait]
pub trait TagProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Look up a model version by the SHA-256 of its file.
    ///
    /// `Ok(None)` means the provider answered without data (any non-200
    /// status). `Err` is reserved for failures before a status was received
    /// or a 200 body that does not decode.
    async fn lookup(&self, hash: &str) -> Result<Option<ModelVersionInfo>, ProviderError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
