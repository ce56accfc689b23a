use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all satis-import operations.
#[derive(Debug, Error, Diagnostic)]
pub enum SatisError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file the command needs to read does not exist.
    #[error("File not found: {}", .path.display())]
    #[diagnostic(help("Check that the path is correct and the file exists"))]
    FileNotFound { path: PathBuf },

    /// A JSON file could not be decoded, or does not have the expected shape.
    #[error("Failed to parse {}: {message}", .path.display())]
    #[diagnostic(help("Check that the file is valid JSON and that its fields have the expected types"))]
    Parse { path: PathBuf, message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SatisResult<T> = miette::Result<T>;
