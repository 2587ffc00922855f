//! CLI command implementations
//!
//! Each command returns its rendered stdout payload so nothing is printed
//! on failure.

pub mod get_item;
pub mod project_stats;
