//! Error types for codeql-perms
//!
//! Uses `thiserror` for library errors. Only `DirectoryMissing` is fatal to a
//! run; every other variant is caught per file and turned into a diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for validator operations
pub type ValidateResult<T> = Result<T, ValidateError>;

/// Main error type for validator operations
#[derive(Error, Debug)]
pub enum ValidateError {
    /// The workflow directory does not exist
    #[error("{} directory not found", path.display())]
    DirectoryMissing { path: PathBuf },

    /// IO error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("{0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Document parsed but has a shape the rules cannot walk
    #[error("{message}")]
    Structure { message: String },

    /// Config file could not be read or parsed
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },
}

impl ValidateError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }
}
