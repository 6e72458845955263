//! Cache-first tag resolution.

use std::sync::Arc;

use crate::assets::AssetResolver;
use crate::error::Result;
use crate::lookup::TagProvider;
use crate::types::{ResolveOptions, ResolvedTags};

use super::cache::{TagCache, TagCacheStore};
use super::hash::Hasher;

/// Resolves the trained words for a LoRA by name.
///
/// The cache is read on every call. A cached non-empty list is returned as
/// is unless `force_refresh` is set; an empty or missing entry is looked up
/// when `query_enabled` is set.
pub struct TagPipeline {
    store: TagCacheStore,
    provider: Box<dyn TagProvider>,
    assets: Arc<dyn AssetResolver>,
}

impl TagPipeline {
    pub fn new(
        store: TagCacheStore,
        provider: Box<dyn TagProvider>,
        assets: Arc<dyn AssetResolver>,
    ) -> Self {
        Self {
            store,
            provider,
            assets,
        }
    }

    pub fn store(&self) -> &TagCacheStore {
        &self.store
    }

    pub fn assets(&self) -> &Arc<dyn AssetResolver> {
        &self.assets
    }

    /// Resolve tags for `asset_name`.
    ///
    /// Outcomes of a lookup:
    /// - record with trained words: cached and returned
    /// - no record (non-200): an empty entry is cached to mark the LoRA as
    ///   known and tagless, and the result is empty. A later call with
    ///   `query_enabled` still retries it.
    /// - record without trained words: cache untouched, cached value returned
    pub async fn resolve(&self, asset_name: &str, options: ResolveOptions) -> Result<ResolvedTags> {
        let mut cache = self.store.load();
        let baseline = cache
            .as_ref()
            .and_then(|c| c.get(asset_name))
            .cloned()
            .unwrap_or_default();

        let should_query =
            (baseline.is_empty() && options.query_enabled) || options.force_refresh;
        if !should_query {
            tracing::debug!("Cache hit for {asset_name}: {} tags", baseline.len());
            return Ok(ResolvedTags::from_tags(baseline));
        }

        let path = self.assets.resolve(asset_name)?;
        tracing::info!("Calculating hash for {asset_name}");
        let hash = Hasher::content_hash(&path)?;
        tracing::debug!("  SHA-256: {hash}");

        tracing::info!("Requesting trained words from {}", self.provider.name());
        let tags = match self.provider.lookup(&hash).await? {
            Some(info) => match info.trained_words {
                Some(words) => {
                    tracing::info!("Found {} trained words for {asset_name}", words.len());
                    cache
                        .get_or_insert_with(TagCache::new)
                        .insert(asset_name.to_string(), words.clone());
                    self.persist(cache.as_ref());
                    words
                }
                None => {
                    tracing::info!("Record for {asset_name} has no trained words");
                    baseline
                }
            },
            None => {
                tracing::info!("No information found for {asset_name}");
                cache
                    .get_or_insert_with(TagCache::new)
                    .insert(asset_name.to_string(), Vec::new());
                self.persist(cache.as_ref());
                Vec::new()
            }
        };

        Ok(ResolvedTags::from_tags(tags))
    }

    fn persist(&self, cache: Option<&TagCache>) {
        if let Some(cache) = cache {
            self.store.save(cache);
        }
    }
}
