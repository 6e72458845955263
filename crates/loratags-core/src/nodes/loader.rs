//! LoRA loader node: tags plus weight merge.

use std::sync::Arc;

use crate::error::{LoraTagsError, Result};
use crate::pipeline::TagPipeline;

use super::backend::LoraBackend;
use super::descriptor::{STRENGTH_MAX, STRENGTH_MIN};
use super::query::{TagsQueryInputs, TagsQueryNode};
use super::slot::WeightSlot;

/// Inputs for [`LoraLoaderNode::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoraLoaderInputs {
    pub tags: TagsQueryInputs,
    pub strength_model: f32,
    pub strength_clip: f32,
    /// Skip loading and merging, pass model and clip through
    pub bypass: bool,
}

impl LoraLoaderInputs {
    /// Inputs for `lora_name` with the declared defaults.
    pub fn new(lora_name: impl Into<String>) -> Self {
        Self {
            tags: TagsQueryInputs::new(lora_name),
            strength_model: 1.0,
            strength_clip: 1.0,
            bypass: false,
        }
    }

    /// Check strengths against the declared bounds.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("strength_model", self.strength_model),
            ("strength_clip", self.strength_clip),
        ] {
            let value = f64::from(value);
            if !(STRENGTH_MIN..=STRENGTH_MAX).contains(&value) {
                return Err(LoraTagsError::Input {
                    field,
                    message: format!(
                        "{value} is outside [{STRENGTH_MIN}, {STRENGTH_MAX}]"
                    ),
                });
            }
        }
        self.tags.validate()
    }

    /// Whether this call leaves the model untouched.
    pub fn is_passthrough(&self) -> bool {
        self.bypass || (self.strength_model == 0.0 && self.strength_clip == 0.0)
    }
}

/// Outputs of [`LoraLoaderNode::run`], in declared order.
#[derive(Debug)]
pub struct LoraLoaderOutput<M, C> {
    pub model: M,
    pub clip: C,
    pub civitai_tags: String,
    pub civitai_tags_list: Vec<String>,
}

/// Applies a LoRA and reports its trained words.
///
/// Keeps the most recently loaded weights so re-running a graph with the same
/// LoRA skips the file read.
pub struct LoraLoaderNode<B: LoraBackend> {
    query: TagsQueryNode,
    backend: B,
    loaded: WeightSlot<B::Weights>,
}

impl<B: LoraBackend> LoraLoaderNode<B> {
    pub fn new(pipeline: Arc<TagPipeline>, backend: B) -> Self {
        Self {
            query: TagsQueryNode::new(pipeline),
            backend,
            loaded: WeightSlot::new(),
        }
    }

    /// The weight slot, for inspection.
    pub fn loaded(&self) -> &WeightSlot<B::Weights> {
        &self.loaded
    }

    /// Drop the cached weights, returning the path they were loaded from.
    pub fn unload(&mut self) -> Option<std::path::PathBuf> {
        let (path, _weights) = self.loaded.take()?;
        tracing::debug!("Unloaded weights for {:?}", path);
        Some(path)
    }

    pub async fn run(
        &mut self,
        inputs: &LoraLoaderInputs,
        model: B::Model,
        clip: B::Clip,
    ) -> Result<LoraLoaderOutput<B::Model, B::Clip>> {
        inputs.validate()?;

        if inputs.is_passthrough() {
            tracing::debug!("Bypassing {}", inputs.tags.lora_name);
            return Ok(LoraLoaderOutput {
                model,
                clip,
                civitai_tags: inputs.tags.opt_prompt.clone().unwrap_or_default(),
                civitai_tags_list: Vec::new(),
            });
        }

        let resolved = self.query.run(&inputs.tags).await?;

        let path = self.query.pipeline().assets().resolve(&inputs.tags.lora_name)?;
        let backend = &self.backend;
        let weights = self
            .loaded
            .get_or_try_load(&path, |p| backend.load_weights(p))
            .map_err(LoraTagsError::Backend)?;
        let (model, clip) = backend
            .apply(
                model,
                clip,
                weights,
                inputs.strength_model,
                inputs.strength_clip,
            )
            .map_err(LoraTagsError::Backend)?;

        Ok(LoraLoaderOutput {
            model,
            clip,
            civitai_tags: resolved.display,
            civitai_tags_list: resolved.tags,
        })
    }
}
