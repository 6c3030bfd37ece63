//! CLI-level errors (wraps library errors)

use std::path::PathBuf;

use thiserror::Error;

use crate::errors::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Tree(_) | CliError::Input(_) => crate::exitcode::DATAERR,
            CliError::Io { .. } => crate::exitcode::NOINPUT,
            CliError::Config { .. } => crate::exitcode::CONFIG,
        }
    }
}
