//! The host seam for loading and applying LoRA weights.

use std::path::Path;

/// Error type returned by host backends.
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// Loads LoRA weight files and merges them into a model/clip pair.
///
/// Implemented by the embedding host; errors pass through untouched.
pub trait LoraBackend {
    type Model;
    type Clip;
    type Weights;

    /// Read a weight file.
    fn load_weights(&self, path: &Path) -> Result<Self::Weights, BackendError>;

    /// Produce a patched model/clip pair at the given strengths.
    fn apply(
        &self,
        model: Self::Model,
        clip: Self::Clip,
        weights: &Self::Weights,
        strength_model: f32,
        strength_clip: f32,
    ) -> Result<(Self::Model, Self::Clip), BackendError>;
}
