//! Persistent JSON cache of trained words per LoRA.
//!
//! The whole cache is one JSON object, `{"<lora name>": ["tag", ...]}`.
//! A key with an empty list records that the LoRA was looked up and had no
//! tags. Resolution with querying enabled still retries such entries.
//!
//! Load failures are never fatal: a missing or corrupt file reads as "no
//! cache". Writes replace the whole document; concurrent writers are not
//! coordinated and the last write wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// LoRA name → ordered trained words.
pub type TagCache = BTreeMap<String, Vec<String>>;

/// Reads and writes the tag cache document at a fixed path.
#[derive(Debug, Clone)]
pub struct TagCacheStore {
    path: PathBuf,
}

impl TagCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the cache document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cache document.
    ///
    /// Returns `None` when the file is missing, unreadable, or not an object
    /// of string → string array. Only the latter two are logged as warnings.
    pub fn load(&self) -> Option<TagCache> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Tag cache not found at {:?}", self.path);
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to read tag cache {:?}: {e}", self.path);
                return None;
            }
        };

        match serde_json::from_str::<TagCache>(&content) {
            Ok(cache) => {
                tracing::debug!("Loaded {} cached entries from {:?}", cache.len(), self.path);
                Some(cache)
            }
            Err(e) => {
                tracing::warn!("Error decoding tag cache {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Overwrite the cache document with `cache`, pretty-printed.
    ///
    /// Returns whether the write succeeded. Failures are logged and left to
    /// the caller to ignore; the in-memory result stays valid either way.
    pub fn save(&self, cache: &TagCache) -> bool {
        match self.write(cache) {
            Ok(()) => {
                tracing::info!("Tag cache saved to {:?}", self.path);
                true
            }
            Err(e) => {
                tracing::warn!("Error saving tag cache to {:?}: {e}", self.path);
                false
            }
        }
    }

    fn write(&self, cache: &TagCache) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(cache).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, json)
    }

    /// Delete the cache document. A missing file is not an error.
    pub fn clear(&self) -> std::io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
