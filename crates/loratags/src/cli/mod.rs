//! Command implementations.

pub mod cache;
pub mod config;
pub mod loras;
pub mod nodes;
pub mod tags;
