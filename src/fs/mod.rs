//! File system utilities for DOH
//!
//! Provides path resolution and JSON file loading.

mod json;
mod paths;

pub use json::{read_index, read_json, read_json_optional, read_session};
pub use paths::{
    get_doh_dir, get_index_path, get_memory_dir, get_session_path, resolve_project_root,
};
