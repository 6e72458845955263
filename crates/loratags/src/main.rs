//! loratags CLI - look up, cache and select the trained words of LoRA files.
//!
//! LoRA names are paths relative to the configured LoRA directory. Lookups go
//! to Civitai by the file's SHA-256 and are cached in a JSON file so each
//! LoRA is only queried once.
//!
//! # Usage
//!
//! ```bash
//! # Trained words for a LoRA (queried on first use, cached afterwards)
//! loratags tags styles/ink.safetensors
//!
//! # Pick the first two and the last tag
//! loratags select "0:2,-1" --name styles/ink.safetensors
//!
//! # Show indices to build a selector from
//! loratags view --name styles/ink.safetensors
//!
//! # Inspect the cache
//! loratags cache show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// loratags - trained-word lookup and selection for LoRA files.
#[derive(Parser, Debug)]
#[command(name = "loratags")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "LORATAGS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the trained words of a LoRA
    Tags(cli::tags::TagsArgs),

    /// Pick tags by index or slice, e.g. "0,2:4,-1"
    Select(cli::tags::SelectArgs),

    /// List tags with their indices
    View(cli::tags::ViewArgs),

    /// List LoRA files and hash them
    Loras(cli::loras::LorasArgs),

    /// Inspect or clear the tag cache
    Cache(cli::cache::CacheArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),

    /// Print the node descriptors for host registration as JSON
    Nodes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(loratags_core::Config::default_path);
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `loratags config path`."
            );
            loratags_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("loratags v{}", loratags_core::VERSION);

    match cli.command {
        Commands::Tags(args) => cli::tags::execute_tags(args, &config).await,
        Commands::Select(args) => cli::tags::execute_select(args, &config).await,
        Commands::View(args) => cli::tags::execute_view(args, &config).await,
        Commands::Loras(args) => cli::loras::execute(args, &config),
        Commands::Cache(args) => cli::cache::execute(args, &config),
        Commands::Config(args) => cli::config::execute(args, &config, &config_path),
        Commands::Nodes => cli::nodes::execute(),
    }
}

fn load_config(
    path: Option<&std::path::Path>,
) -> Result<loratags_core::Config, loratags_core::ConfigError> {
    match path {
        Some(path) => loratags_core::Config::load_from(path),
        None => loratags_core::Config::load(),
    }
}
