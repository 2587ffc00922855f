//! DOH - Query tools for the DOH project index
//!
//! This library provides the core functionality behind the `get-item` and
//! `project-stats` commands, including:
//! - Schema definitions for the project index and session sidecar
//! - Item resolution by id and type, and project statistics
//! - File system utilities for locating and reading the index
//! - Rendering of results as JSON or a human-readable report

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use config::Config;
pub use errors::{DohError, Result};
pub use schemas::{BucketKind, Item, ProjectIndex, SessionState};
