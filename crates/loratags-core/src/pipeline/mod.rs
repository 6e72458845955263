//! Tag resolution pipeline.
//!
//! - **hash**: SHA-256 of the LoRA file, the lookup key
//! - **cache**: JSON document of previously resolved tags
//! - **resolve**: cache-first orchestration over hash, cache and provider

pub mod cache;
pub mod hash;
pub mod resolve;

pub use cache::{TagCache, TagCacheStore};
pub use hash::Hasher;
pub use resolve::TagPipeline;
