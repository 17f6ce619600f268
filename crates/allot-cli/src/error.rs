//! CLI error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// An input file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        /// The file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An input file is not a valid request or configuration.
    #[error("Invalid {kind} in {}: {message}", .path.display())]
    Parse {
        /// What the file should hold.
        kind: &'static str,
        /// The file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

impl CliError {
    /// Creates a parse error.
    pub fn parse(kind: &'static str, path: &Path, message: impl ToString) -> Self {
        Self::Parse {
            kind,
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

/// Reads a whole input file.
pub fn read_file(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
