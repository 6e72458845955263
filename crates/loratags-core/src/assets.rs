//! LoRA name resolution and listing.
//!
//! A LoRA is addressed by its path relative to the LoRA root, with `/`
//! separators (e.g. `styles/ink.safetensors`). That name is also the tag
//! cache key.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::GeneralConfig;
use crate::error::{LoraTagsError, Result};

/// Maps asset names to files and enumerates what is available.
pub trait AssetResolver: Send + Sync {
    /// Absolute path for an asset name.
    fn resolve(&self, name: &str) -> Result<PathBuf>;

    /// All asset names, in display order.
    fn list(&self) -> Vec<String>;
}

/// LoRA files under a single root directory.
pub struct LoraDirectory {
    root: PathBuf,
    extensions: Vec<String>,
}

impl LoraDirectory {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String]) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Build from the `[general]` config section and an already-expanded root.
    pub fn from_config(root: PathBuf, config: &GeneralConfig) -> Self {
        Self::new(root, &config.supported_extensions)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if a file has a supported extension.
    fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext_lower)
            })
            .unwrap_or(false)
    }

    fn name_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

impl AssetResolver for LoraDirectory {
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let not_found = || LoraTagsError::AssetNotFound {
            name: name.to_string(),
            root: self.root.clone(),
        };

        let relative = Path::new(name);
        // Names never escape the root.
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir))
        {
            return Err(not_found());
        }

        let path = self.root.join(relative);
        if path.is_file() {
            Ok(path)
        } else {
            Err(not_found())
        }
    }

    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = WalkDir::new(&self.root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && self.is_supported(e.path()))
            .filter_map(|e| self.name_for(e.path()))
            .collect();

        names.sort_by_key(|name| name.to_lowercase());
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lora_dir() -> (tempfile::TempDir, LoraDirectory) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("styles")).unwrap();
        std::fs::write(dir.path().join("Zeta.safetensors"), b"z").unwrap();
        std::fs::write(dir.path().join("alpha.ckpt"), b"a").unwrap();
        std::fs::write(dir.path().join("styles/ink.safetensors"), b"i").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"n").unwrap();

        let loras = LoraDirectory::from_config(dir.path().to_path_buf(), &GeneralConfig::default());
        (dir, loras)
    }

    #[test]
    fn test_is_supported() {
        let (_dir, loras) = lora_dir();
        assert!(loras.is_supported(Path::new("a.safetensors")));
        assert!(loras.is_supported(Path::new("a.SAFETENSORS")));
        assert!(loras.is_supported(Path::new("a.pt")));
        assert!(!loras.is_supported(Path::new("a.txt")));
        assert!(!loras.is_supported(Path::new("safetensors")));
    }

    #[test]
    fn test_list_sorted_case_insensitive() {
        let (_dir, loras) = lora_dir();
        assert_eq!(
            loras.list(),
            vec!["alpha.ckpt", "styles/ink.safetensors", "Zeta.safetensors"]
        );
    }

    #[test]
    fn test_resolve_nested_name() {
        let (dir, loras) = lora_dir();
        let path = loras.resolve("styles/ink.safetensors").unwrap();
        assert_eq!(path, dir.path().join("styles/ink.safetensors"));
    }

    #[test]
    fn test_resolve_missing_name() {
        let (_dir, loras) = lora_dir();
        let err = loras.resolve("missing.safetensors").unwrap_err();
        assert!(matches!(err, LoraTagsError::AssetNotFound { .. }));
    }

    #[test]
    fn test_resolve_rejects_escape() {
        let (_dir, loras) = lora_dir();
        assert!(loras.resolve("../outside.safetensors").is_err());
    }
}
