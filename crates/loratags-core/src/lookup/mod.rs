//! Remote trained-word lookup by content hash.

pub(crate) mod civitai;
pub(crate) mod provider;

pub use civitai::CivitaiProvider;
pub use provider::{resolve_env_var, ModelVersionInfo, TagProvider};
