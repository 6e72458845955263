//! Error types for tag resolution, selection and LoRA loading.
//!
//! Recoverable conditions (missing cache file, non-200 lookups) never reach
//! these types; they are logged and downgraded to empty results. What is
//! left here propagates to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for loratags operations.
#[derive(Error, Debug)]
pub enum LoraTagsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote lookup failed before a status code was available
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Malformed or out-of-range tag selector
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),

    /// Asset name did not resolve to a file
    #[error("LoRA not found: {name} (searched {root})")]
    AssetNotFound { name: String, root: PathBuf },

    /// Node input outside its declared bounds
    #[error("Invalid input `{field}`: {message}")]
    Input { field: &'static str, message: String },

    /// Weight loading or merging failed inside the host backend
    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors from the remote tag provider.
///
/// A non-200 response is not an error: the provider reports it as "no data".
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Transport failure (DNS, connect, timeout)
    #[error("Lookup request for {hash} failed: {message}")]
    Request { hash: String, message: String },

    /// A 200 response whose body did not match the expected schema
    #[error("Failed to decode lookup response for {hash}: {message}")]
    Decode { hash: String, message: String },
}

/// Tag selector parse and range errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Term is neither an integer nor a single-colon slice
    #[error("Invalid selector term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: String },

    /// Index falls outside the tag list
    #[error("Index {index} out of range for {len} tags")]
    IndexOutOfRange { index: i64, len: usize },
}

/// Convenience type alias for loratags results.
pub type Result<T> = std::result::Result<T, LoraTagsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_error_message() {
        let err = SelectorError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "Index 7 out of range for 3 tags");
    }

    #[test]
    fn test_selector_error_converts_to_top_level() {
        let err: LoraTagsError = SelectorError::InvalidTerm {
            term: "x".into(),
            reason: "not an integer".into(),
        }
        .into();
        assert!(err.to_string().starts_with("Selector error"));
    }
}
