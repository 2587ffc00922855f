//! Path resolution utilities for DOH
//!
//! Provides functions to resolve the project root and construct paths
//! to the files the query tools read.

use std::path::{Path, PathBuf};

/// Resolve the project root, optionally using an override.
///
/// # Arguments
/// * `root_option` - Optional override for the project root
///
/// # Returns
/// The override if given, otherwise the current working directory
pub fn resolve_project_root(root_option: Option<&Path>) -> PathBuf {
    match root_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .doh directory.
pub fn get_doh_dir(root: &Path) -> PathBuf {
    root.join(".doh")
}

/// Get the path to the project-index.json file.
pub fn get_index_path(root: &Path) -> PathBuf {
    get_doh_dir(root).join("project-index.json")
}

/// Get the path to the memory directory.
pub fn get_memory_dir(root: &Path) -> PathBuf {
    get_doh_dir(root).join("memory")
}

/// Get the path to the active-session.json file.
pub fn get_session_path(root: &Path) -> PathBuf {
    get_memory_dir(root).join("active-session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_doh_dir() {
        let root = PathBuf::from("/repo");
        assert_eq!(get_doh_dir(&root), PathBuf::from("/repo/.doh"));
    }

    #[test]
    fn test_get_index_path() {
        let root = PathBuf::from("/repo");
        assert_eq!(get_index_path(&root), PathBuf::from("/repo/.doh/project-index.json"));
    }

    #[test]
    fn test_get_session_path() {
        let root = PathBuf::from("/repo");
        assert_eq!(get_memory_dir(&root), PathBuf::from("/repo/.doh/memory"));
        assert_eq!(
            get_session_path(&root),
            PathBuf::from("/repo/.doh/memory/active-session.json")
        );
    }

    #[test]
    fn test_resolve_project_root_with_override() {
        let path = PathBuf::from("/custom/path");
        let resolved = resolve_project_root(Some(&path));
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_resolve_project_root_without_override() {
        let resolved = resolve_project_root(None);
        assert!(!resolved.as_os_str().is_empty());
    }
}
