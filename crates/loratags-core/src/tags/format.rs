//! Display helpers for tag lists.

use crate::types::ResolvedTags;

/// Render one `<index> : "<tag>"` line per tag.
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .enumerate()
        .map(|(i, tag)| format!("{i} : \"{tag}\"\n"))
        .collect()
}

/// Combine resolved tags with an upstream prompt.
///
/// With `tags_out`, the prompt is prepended to the display string and
/// appended to the list. Without it, the prompt replaces both.
///
/// When there are no tags the display is the bare prompt, without the
/// trailing `", "` the Python node produced.
pub fn compose_prompt(resolved: ResolvedTags, prompt: Option<&str>, tags_out: bool) -> ResolvedTags {
    let Some(prompt) = prompt else {
        return resolved;
    };

    if !tags_out {
        return ResolvedTags {
            display: prompt.to_string(),
            tags: vec![prompt.to_string()],
        };
    }

    let display = if resolved.display.is_empty() {
        prompt.to_string()
    } else {
        format!("{prompt}, {}", resolved.display)
    };
    let mut tags = resolved.tags;
    tags.push(prompt.to_string());
    ResolvedTags { display, tags }
}
