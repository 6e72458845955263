//! The `tags`, `select` and `view` commands.

use std::sync::Arc;

use clap::{Args, ValueEnum};
use loratags_core::nodes::{TagsQueryInputs, TagsQueryNode, TagsSelectorNode, TagsViewerNode};
use loratags_core::{Config, ResolveOptions};

/// How resolved tags are printed.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// The comma-joined tag string
    #[default]
    Text,
    /// `{"display": ..., "tags": [...]}`
    Json,
}

/// Arguments for the `tags` command.
#[derive(Args, Debug)]
pub struct TagsArgs {
    /// LoRA name, relative to the LoRA directory
    pub name: String,

    /// Only read the cache; never query the provider
    #[arg(long)]
    pub no_query: bool,

    /// Query the provider even if tags are cached
    #[arg(short, long)]
    pub force: bool,

    /// Prompt to combine with the tags
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Replace the tags with --prompt instead of prepending it
    #[arg(long, requires = "prompt")]
    pub replace: bool,

    /// Also log the resolved tags
    #[arg(long)]
    pub print: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl TagsArgs {
    fn to_inputs(&self) -> TagsQueryInputs {
        TagsQueryInputs {
            lora_name: self.name.clone(),
            query_tags: !self.no_query,
            tags_out: !self.replace,
            print_tags: self.print,
            force_fetch: self.force,
            opt_prompt: self.prompt.clone(),
        }
    }
}

/// Where `select` and `view` get their tag list from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TagSource {
    /// Resolve the tags of this LoRA
    #[arg(long)]
    pub name: Option<String>,

    /// Use these comma-separated tags directly
    #[arg(long, value_delimiter = ',')]
    pub tags: Option<Vec<String>>,
}

/// Arguments for the `select` command.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Comma-separated indices and start:end slices
    #[arg(default_value = ":", allow_hyphen_values = true)]
    pub selector: String,

    #[command(flatten)]
    pub source: TagSource,
}

/// Arguments for the `view` command.
#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub source: TagSource,
}

/// Execute the `tags` command.
pub async fn execute_tags(args: TagsArgs, config: &Config) -> anyhow::Result<()> {
    let node = TagsQueryNode::new(Arc::new(loratags_core::pipeline_from_config(config)?));
    let resolved = node.run(&args.to_inputs()).await?;

    match args.format {
        OutputFormat::Text => println!("{}", resolved.display),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
    }
    Ok(())
}

/// Execute the `select` command.
pub async fn execute_select(args: SelectArgs, config: &Config) -> anyhow::Result<()> {
    let tags = load_source(args.source, config).await?;
    println!("{}", TagsSelectorNode.run(&tags, Some(args.selector.as_str()))?);
    Ok(())
}

/// Execute the `view` command.
pub async fn execute_view(args: ViewArgs, config: &Config) -> anyhow::Result<()> {
    let tags = load_source(args.source, config).await?;
    print!("{}", TagsViewerNode.run(&tags));
    Ok(())
}

async fn load_source(source: TagSource, config: &Config) -> anyhow::Result<Vec<String>> {
    match (source.name, source.tags) {
        (_, Some(tags)) => Ok(tags.into_iter().map(|t| t.trim().to_string()).collect()),
        (Some(name), None) => {
            let pipeline = loratags_core::pipeline_from_config(config)?;
            let resolved = pipeline.resolve(&name, ResolveOptions::default()).await?;
            Ok(resolved.tags)
        }
        (None, None) => anyhow::bail!("either --name or --tags is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TestCommand,
    }

    #[derive(clap::Subcommand)]
    enum TestCommand {
        Tags(TagsArgs),
        Select(SelectArgs),
    }

    #[test]
    fn tags_args_defaults_map_to_node_defaults() {
        let cli = TestCli::parse_from(["t", "tags", "a.safetensors"]);
        let TestCommand::Tags(args) = cli.command else {
            panic!("expected tags");
        };
        assert_eq!(args.to_inputs(), TagsQueryInputs::new("a.safetensors"));
        assert!(matches!(args.format, OutputFormat::Text));
    }

    #[test]
    fn tags_args_flags() {
        let cli = TestCli::parse_from([
            "t", "tags", "a.safetensors", "--no-query", "--force", "-p", "hi", "--replace",
        ]);
        let TestCommand::Tags(args) = cli.command else {
            panic!("expected tags");
        };
        let inputs = args.to_inputs();
        assert!(!inputs.query_tags);
        assert!(inputs.force_fetch);
        assert!(!inputs.tags_out);
        assert_eq!(inputs.opt_prompt.as_deref(), Some("hi"));
    }

    #[test]
    fn replace_requires_prompt() {
        assert!(TestCli::try_parse_from(["t", "tags", "a", "--replace"]).is_err());
    }

    #[test]
    fn select_accepts_negative_selector_and_inline_tags() {
        let cli = TestCli::parse_from(["t", "select", "-1", "--tags", "a,b,c"]);
        let TestCommand::Select(args) = cli.command else {
            panic!("expected select");
        };
        assert_eq!(args.selector, "-1");
        assert_eq!(
            args.source.tags,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn select_requires_exactly_one_source() {
        assert!(TestCli::try_parse_from(["t", "select", "0"]).is_err());
        assert!(TestCli::try_parse_from(["t", "select", "0", "--name", "x", "--tags", "a"]).is_err());
    }

    #[tokio::test]
    async fn inline_tags_are_trimmed() {
        let source = TagSource {
            name: None,
            tags: Some(vec![" a".into(), "b ".into()]),
        };
        let tags = load_source(source, &Config::default()).await.unwrap();
        assert_eq!(tags, vec!["a", "b"]);
    }
}
