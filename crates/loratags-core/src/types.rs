//! Core data types shared by the pipeline, nodes and CLI.

use serde::{Deserialize, Serialize};

/// The outcome of resolving tags for one LoRA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTags {
    /// Tags joined with `", "`
    pub display: String,

    /// Tags in provider order
    pub tags: Vec<String>,
}

impl ResolvedTags {
    /// Build from a tag list, deriving the display string.
    pub fn from_tags(tags: Vec<String>) -> Self {
        Self {
            display: tags.join(", "),
            tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Policy flags for a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Query the provider when the cache has nothing for this LoRA
    pub query_enabled: bool,

    /// Query the provider even if the cache already has tags
    pub force_refresh: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            query_enabled: true,
            force_refresh: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tags_joins_display() {
        let resolved = ResolvedTags::from_tags(vec!["a".into(), "b c".into()]);
        assert_eq!(resolved.display, "a, b c");
        assert!(!resolved.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        let resolved = ResolvedTags::default();
        assert_eq!(resolved.display, "");
        assert!(resolved.is_empty());
    }
}
