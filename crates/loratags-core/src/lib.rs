//! loratags core - trained-word lookup, caching and selection for LoRA files.
//!
//! Given a LoRA by name, the pipeline hashes the file, asks a remote
//! model-version index for the words it was trained with, and keeps the answer
//! in a local JSON cache so each LoRA is looked up once.
//!
//! # Architecture
//!
//! ```text
//! name → cache hit? ─yes→ tags
//!          │ no / forced
//!          └→ SHA-256 → by-hash lookup → cache write → tags → select / format
//! ```
//!
//! The [`nodes`] module wraps this for node-graph hosts, adding a LoRA loader
//! that delegates weight loading and merging to a host [`nodes::LoraBackend`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use loratags_core::{Config, ResolveOptions};
//!
//! #[tokio::main]
//! async fn main() -> loratags_core::Result<()> {
//!     let config = Config::load()?;
//!     let pipeline = loratags_core::pipeline_from_config(&config)?;
//!
//!     let tags = pipeline.resolve("detail.safetensors", ResolveOptions::default()).await?;
//!     println!("{}", loratags_core::tags::select(&tags.tags, "0:3")?);
//!     Ok(())
//! }
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod lookup;
pub mod nodes;
pub mod pipeline;
pub mod tags;
pub mod types;

use std::sync::Arc;

pub use assets::{AssetResolver, LoraDirectory};
pub use config::Config;
pub use error::{ConfigError, LoraTagsError, ProviderError, Result, SelectorError};
pub use lookup::{CivitaiProvider, ModelVersionInfo, TagProvider};
pub use pipeline::{Hasher, TagCache, TagCacheStore, TagPipeline};
pub use types::{ResolveOptions, ResolvedTags};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a pipeline wired to Civitai, the configured cache file and LoRA root.
pub fn pipeline_from_config(config: &Config) -> Result<TagPipeline> {
    let provider = CivitaiProvider::from_config(&config.provider)?;
    let assets = LoraDirectory::from_config(config.lora_dir(), &config.general);
    tracing::debug!(
        "Pipeline: cache={:?} loras={:?}",
        config.cache_path(),
        assets.root()
    );
    Ok(TagPipeline::new(
        TagCacheStore::new(config.cache_path()),
        Box::new(provider),
        Arc::new(assets),
    ))
}
