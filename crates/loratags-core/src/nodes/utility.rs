//! Stateless nodes over an already-resolved tag list.

use crate::error::SelectorError;
use crate::tags::{format_tags, select};

use super::descriptor::DEFAULT_SELECTOR;

/// Picks tags by index/slice selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsSelectorNode;

impl TagsSelectorNode {
    /// Select with `selector`, or every tag when it is `None`.
    pub fn run(&self, tags: &[String], selector: Option<&str>) -> Result<String, SelectorError> {
        select(tags, selector.unwrap_or(DEFAULT_SELECTOR))
    }
}

/// Renders an indexed listing to help write selectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsViewerNode;

impl TagsViewerNode {
    pub fn run(&self, tags: &[String]) -> String {
        format_tags(tags)
    }
}
