//! Error types for the DOH query tools
//!
//! Each error type has a string code for programmatic handling and a
//! process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for DOH operations
pub type Result<T> = std::result::Result<T, DohError>;

/// Main error type for all DOH operations
#[derive(Debug, Error)]
pub enum DohError {
    /// Bad command-line arguments
    #[error("{0}")]
    Usage(String),

    /// The project index file does not exist
    #[error("DOH index file not found at {}", .0.display())]
    IndexNotFound(PathBuf),

    /// The index file is not valid JSON or has the wrong shape
    #[error("Invalid JSON in index file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Item type argument is not one of the known buckets
    #[error("Unknown item type: {0}")]
    UnknownType(String),

    /// Lookup succeeded but no item matched
    #[error("{} with ID '{id}' not found", .item_type.as_deref().unwrap_or("Item"))]
    ItemNotFound {
        id: String,
        item_type: Option<String>,
    },

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DohError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            DohError::Usage(_) => "USAGE",
            DohError::IndexNotFound(_) => "INDEX_NOT_FOUND",
            DohError::Parse { .. } => "INVALID_JSON",
            DohError::UnknownType(_) => "UNKNOWN_TYPE",
            DohError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            DohError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to the process exit code of the command-line tools
pub fn to_exit_code(error: &DohError) -> i32 {
    match error {
        DohError::Usage(_) | DohError::UnknownType(_) => 1,
        DohError::IndexNotFound(_) => 2,
        // An unreadable index is reported the same way as a malformed one
        DohError::Parse { .. } | DohError::Io(_) => 3,
        DohError::ItemNotFound { .. } => 4,
    }
}
