//! Error types for the branch checklist

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for checklist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the branch checklist
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to enter raw terminal mode: {0}")]
    RawMode(#[source] std::io::Error),

    #[error("Failed to read terminal input: {0}")]
    Input(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("git failed: {message}")]
    Git { message: String },
}
