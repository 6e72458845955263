//! Declared node inputs and outputs.
//!
//! Mirrors what a node-graph host needs to register each node: identifier,
//! category, typed inputs with defaults and bounds, and fixed outputs. The
//! bounds here are also what [`LoraLoaderInputs::validate`] enforces.
//!
//! [`LoraLoaderInputs::validate`]: super::LoraLoaderInputs::validate

use serde::Serialize;

/// Menu category shared by every node.
pub const CATEGORY: &str = "llwt";

pub const STRENGTH_DEFAULT: f64 = 1.0;
pub const STRENGTH_MIN: f64 = 0.0;
pub const STRENGTH_MAX: f64 = 2.0;
pub const STRENGTH_STEP: f64 = 0.1;

/// Selector used when the host supplies none: every tag.
pub const DEFAULT_SELECTOR: &str = ":";

/// One registrable node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDescriptor {
    pub id: &'static str,
    pub category: &'static str,
    pub function: &'static str,
    pub required: Vec<InputSpec>,
    pub optional: Vec<InputSpec>,
    pub outputs: Vec<OutputSpec>,
}

/// A named input slot.
#[derive(Debug, Clone, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: InputKind,
}

/// Input slot type with its widget options.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InputKind {
    Model,
    Clip,
    /// One of the names the host enumerates from an asset folder
    Choice { folder: &'static str },
    Float {
        default: f64,
        min: f64,
        max: f64,
        step: f64,
    },
    Boolean { default: bool },
    String {
        #[serde(skip_serializing_if = "Option::is_none")]
        default: Option<&'static str>,
        force_input: bool,
    },
    List,
}

/// A named output slot.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

fn input(name: &'static str, kind: InputKind) -> InputSpec {
    InputSpec { name, kind }
}

fn output(name: &'static str, kind: &'static str) -> OutputSpec {
    OutputSpec { name, kind }
}

fn strength(name: &'static str) -> InputSpec {
    input(
        name,
        InputKind::Float {
            default: STRENGTH_DEFAULT,
            min: STRENGTH_MIN,
            max: STRENGTH_MAX,
            step: STRENGTH_STEP,
        },
    )
}

fn toggle(name: &'static str, default: bool) -> InputSpec {
    input(name, InputKind::Boolean { default })
}

fn opt_prompt() -> InputSpec {
    input(
        "opt_prompt",
        InputKind::String {
            default: None,
            force_input: true,
        },
    )
}

fn lora_name() -> InputSpec {
    input("lora_name", InputKind::Choice { folder: "loras" })
}

/// Every node this crate provides, in registration order.
pub fn descriptors() -> Vec<NodeDescriptor> {
    vec![
        NodeDescriptor {
            id: "LoraLoaderTagsQuery",
            category: CATEGORY,
            function: "load_lora",
            required: vec![
                input("model", InputKind::Model),
                input("clip", InputKind::Clip),
                lora_name(),
                strength("strength_model"),
                strength("strength_clip"),
                toggle("query_tags", true),
                toggle("tags_out", true),
                toggle("print_tags", false),
                toggle("bypass", false),
                toggle("force_fetch", false),
            ],
            optional: vec![opt_prompt()],
            outputs: vec![
                output("MODEL", "MODEL"),
                output("CLIP", "CLIP"),
                output("civitai_tags", "STRING"),
                output("civitai_tags_list", "LIST"),
            ],
        },
        NodeDescriptor {
            id: "LoraTagsQueryOnly",
            category: CATEGORY,
            function: "load_lora",
            required: vec![
                lora_name(),
                toggle("query_tags", true),
                toggle("tags_out", true),
                toggle("print_tags", false),
                toggle("force_fetch", false),
            ],
            optional: vec![opt_prompt()],
            outputs: vec![
                output("civitai_tags", "STRING"),
                output("civitai_tags_list", "LIST"),
            ],
        },
        NodeDescriptor {
            id: "TagsSelector",
            category: CATEGORY,
            function: "select_tags",
            required: vec![
                input("tags_list", InputKind::List),
                input(
                    "selector",
                    InputKind::String {
                        default: Some(DEFAULT_SELECTOR),
                        force_input: false,
                    },
                ),
            ],
            optional: vec![],
            outputs: vec![output("STRING", "STRING")],
        },
        NodeDescriptor {
            id: "TagsViewer",
            category: CATEGORY,
            function: "format_tags",
            required: vec![input("tags_list", InputKind::List)],
            optional: vec![],
            outputs: vec![output("STRING", "STRING")],
        },
    ]
}
