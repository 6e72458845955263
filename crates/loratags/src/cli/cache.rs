//! The `cache` command for inspecting the tag cache.

use clap::{Args, Subcommand};
use loratags_core::{Config, TagCacheStore};

/// Arguments for the `cache` command.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

/// Subcommands for cache management.
#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Print cached tags, for one LoRA or all
    Show {
        /// Only this LoRA
        name: Option<String>,
    },

    /// Show the cache file path
    Path,

    /// Delete the cache file
    Clear,
}

/// Execute the cache command.
pub fn execute(args: CacheArgs, config: &Config) -> anyhow::Result<()> {
    let store = TagCacheStore::new(config.cache_path());

    match args.command {
        CacheCommand::Show { name } => {
            let cache = store.load().unwrap_or_default();
            match name {
                Some(name) => match cache.get(&name) {
                    Some(tags) => println!("{}", serde_json::to_string_pretty(tags)?),
                    None => anyhow::bail!("{name} is not cached"),
                },
                None => println!("{}", serde_json::to_string_pretty(&cache)?),
            }
        }

        CacheCommand::Path => {
            println!("{}", store.path().display());
        }

        CacheCommand::Clear => {
            store.clear()?;
            tracing::info!("Cleared tag cache at {:?}", store.path());
        }
    }

    Ok(())
}
