//! JSON file loading with schema validation
//!
//! The index is required and fails fast; the session sidecar is optional
//! and degrades to its default.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::{DohError, Result};
use crate::schemas::{ProjectIndex, SessionState};

use super::paths::{get_index_path, get_session_path};

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// * `IndexNotFound` - If the file does not exist
/// * `Parse` - If the file is not valid JSON or does not match the expected shape
/// * `Io` - If the file exists but cannot be read
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    // Also covers a parent component that is a regular file
    if !path.exists() {
        return Err(DohError::IndexNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DohError::IndexNotFound(path.to_path_buf())
        } else {
            DohError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| DohError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Read a JSON file that may be absent or damaged.
///
/// Returns `T::default()` when the file does not exist, cannot be read,
/// or does not parse. Damage is logged, never returned.
pub fn read_json_optional<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        debug!(path = %path.display(), "optional file absent, using defaults");
        return T::default();
    }

    match read_json(path) {
        Ok(value) => value,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable optional file");
            T::default()
        }
    }
}

/// Read the project index for a project root.
///
/// # Errors
/// * `IndexNotFound` - If `.doh/project-index.json` is missing
/// * `Parse` - If it is malformed
pub fn read_index(root: &Path) -> Result<ProjectIndex> {
    let path = get_index_path(root);
    debug!(path = %path.display(), "loading project index");
    read_json(&path)
}

/// Read the active session sidecar, or an empty session if it is absent or damaged.
pub fn read_session(root: &Path) -> SessionState {
    read_json_optional(&get_session_path(root))
}
