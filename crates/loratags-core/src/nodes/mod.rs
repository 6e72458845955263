//! Node-graph orchestrators.
//!
//! These compose the tag pipeline with a host-provided [`LoraBackend`] so the
//! crate can sit behind a node-graph host's plugin surface. The host owns
//! model/clip types and the weight math; this layer owns tag resolution,
//! prompt composition and the single-slot weight cache.

pub mod backend;
pub mod descriptor;
pub mod loader;
pub mod query;
pub mod slot;
pub mod utility;

pub use backend::{BackendError, LoraBackend};
pub use descriptor::{descriptors, InputKind, InputSpec, NodeDescriptor, OutputSpec};
pub use loader::{LoraLoaderInputs, LoraLoaderNode, LoraLoaderOutput};
pub use query::{TagsQueryInputs, TagsQueryNode};
pub use slot::WeightSlot;
pub use utility::{TagsSelectorNode, TagsViewerNode};
