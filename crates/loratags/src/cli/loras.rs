//! The `loras` command for inspecting LoRA files.

use clap::{Args, Subcommand};
use loratags_core::{AssetResolver, Config, Hasher, LoraDirectory};
use std::path::PathBuf;

/// Arguments for the `loras` command.
#[derive(Args, Debug)]
pub struct LorasArgs {
    #[command(subcommand)]
    pub command: LorasCommand,
}

/// Subcommands for LoRA inspection.
#[derive(Subcommand, Debug)]
pub enum LorasCommand {
    /// List LoRA names under the LoRA directory
    List,

    /// Print the SHA-256 used for lookups
    Hash {
        /// LoRA name, or a file path with --file
        target: String,

        /// Treat the target as a file path instead of a LoRA name
        #[arg(long)]
        file: bool,
    },

    /// Show the LoRA directory
    Path,
}

/// Execute the loras command.
pub fn execute(args: LorasArgs, config: &Config) -> anyhow::Result<()> {
    let loras = LoraDirectory::from_config(config.lora_dir(), &config.general);

    match args.command {
        LorasCommand::List => {
            let names = loras.list();
            if names.is_empty() {
                tracing::warn!("No LoRA files found in {:?}", loras.root());
            }
            for name in names {
                println!("{name}");
            }
        }

        LorasCommand::Hash { target, file } => {
            let path = if file {
                PathBuf::from(target)
            } else {
                loras.resolve(&target)?
            };
            println!("{}", Hasher::content_hash(&path)?);
        }

        LorasCommand::Path => {
            println!("{}", loras.root().display());
        }
    }

    Ok(())
}
