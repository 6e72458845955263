//! Configuration validation.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are usable.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.provider.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError(
                "provider.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.provider.timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "provider.timeout_ms must be > 0".into(),
            ));
        }
        if self.cache.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "cache.path must not be empty".into(),
            ));
        }
        if self.general.supported_extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "general.supported_extensions must list at least one extension".into(),
            ));
        }
        Ok(())
    }
}
