//! Tag lookup without touching weights.

use std::sync::Arc;

use crate::error::{LoraTagsError, Result};
use crate::pipeline::TagPipeline;
use crate::tags::compose_prompt;
use crate::types::{ResolveOptions, ResolvedTags};

/// Inputs shared by every node that resolves tags.
#[derive(Debug, Clone, PartialEq)]
pub struct TagsQueryInputs {
    pub lora_name: String,
    /// Look the LoRA up when the cache has nothing for it
    pub query_tags: bool,
    /// Keep resolved tags alongside `opt_prompt` instead of replacing them
    pub tags_out: bool,
    /// Log the resolved tags
    pub print_tags: bool,
    /// Look the LoRA up even on a cache hit
    pub force_fetch: bool,
    pub opt_prompt: Option<String>,
}

impl TagsQueryInputs {
    /// Inputs for `lora_name` with the declared defaults.
    pub fn new(lora_name: impl Into<String>) -> Self {
        Self {
            lora_name: lora_name.into(),
            query_tags: true,
            tags_out: true,
            print_tags: false,
            force_fetch: false,
            opt_prompt: None,
        }
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            query_enabled: self.query_tags,
            force_refresh: self.force_fetch,
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.lora_name.trim().is_empty() {
            return Err(LoraTagsError::Input {
                field: "lora_name",
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

/// Resolves tags for a LoRA and folds in an optional upstream prompt.
#[derive(Clone)]
pub struct TagsQueryNode {
    pipeline: Arc<TagPipeline>,
}

impl TagsQueryNode {
    pub fn new(pipeline: Arc<TagPipeline>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Arc<TagPipeline> {
        &self.pipeline
    }

    pub async fn run(&self, inputs: &TagsQueryInputs) -> Result<ResolvedTags> {
        inputs.validate()?;
        let resolved = self
            .pipeline
            .resolve(&inputs.lora_name, inputs.resolve_options())
            .await?;
        if inputs.print_tags {
            tracing::info!("trainedWords: {}", resolved.display);
        }
        Ok(compose_prompt(
            resolved,
            inputs.opt_prompt.as_deref(),
            inputs.tags_out,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::resolve::tests::{fixture, Reply, ASSET};
    use std::sync::atomic::Ordering;

    #[tokio::test]
    async fn test_query_with_prompt() {
        let (_dir, pipeline, _calls) = fixture(Reply::Words(vec!["a", "b"]));
        let node = TagsQueryNode::new(Arc::new(pipeline));

        let mut inputs = TagsQueryInputs::new(ASSET);
        inputs.opt_prompt = Some("1girl".into());
        let out = node.run(&inputs).await.unwrap();

        assert_eq!(out.display, "1girl, a, b");
        assert_eq!(out.tags, vec!["a", "b", "1girl"]);
    }

    #[tokio::test]
    async fn test_query_flags_map_to_options() {
        let (_dir, pipeline, calls) = fixture(Reply::Words(vec!["a"]));
        let node = TagsQueryNode::new(Arc::new(pipeline));

        let mut inputs = TagsQueryInputs::new(ASSET);
        inputs.query_tags = false;
        let out = node.run(&inputs).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let (_dir, pipeline, _calls) = fixture(Reply::NotFound);
        let node = TagsQueryNode::new(Arc::new(pipeline));

        let err = node.run(&TagsQueryInputs::new("  ")).await.unwrap_err();
        assert!(matches!(err, LoraTagsError::Input { field: "lora_name", .. }));
    }
}
