//! Pure operations on an already-resolved tag list.

pub mod format;
pub mod select;

pub use format::{compose_prompt, format_tags};
pub use select::{select, Selection, Term};
