//! The `nodes` command.

/// Print every node descriptor as pretty JSON.
pub fn execute() -> anyhow::Result<()> {
    let descriptors = loratags_core::nodes::descriptors();
    println!("{}", serde_json::to_string_pretty(&descriptors)?);
    Ok(())
}
