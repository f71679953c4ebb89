use std::path::PathBuf;

use thiserror::Error;

/// Main error type for flowmod
#[derive(Error, Debug)]
pub enum FlowmodError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse or serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line input (bounds, arguments)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Target path does not exist
    #[error("Target path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// No JSON input files under the target path
    #[error("No JSON files to process under {}", .0.display())]
    NoInputFiles(PathBuf),

    /// A result file could not be written
    #[error("Cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlowmodError {
    /// Errors caused by how the tool was invoked; binaries print usage for these.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            FlowmodError::InvalidInput(_) | FlowmodError::PathNotFound(_) | FlowmodError::NoInputFiles(_)
        )
    }
}

/// Convenient Result type using FlowmodError
pub type Result<T> = std::result::Result<T, FlowmodError>;
