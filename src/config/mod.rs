//! Runtime configuration for the query tools
//!
//! The project root is resolved once at the command-line boundary and
//! passed down explicitly; nothing below this reads the environment.

use std::path::{Path, PathBuf};

use crate::fs::resolve_project_root;

/// Resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the `.doh` folder
    pub project_root: PathBuf,
}

impl Config {
    /// Create a configuration rooted at an explicit directory
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Config {
            project_root: project_root.into(),
        }
    }

    /// Resolve configuration from an optional root override.
    ///
    /// An empty override counts as unset; the fallback is the current
    /// working directory.
    pub fn resolve(root_override: Option<&Path>) -> Self {
        let root_override = root_override.filter(|p| !p.as_os_str().is_empty());
        Config::new(resolve_project_root(root_override))
    }
}
