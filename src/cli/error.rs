//! CLI error types

use std::path::PathBuf;

use thiserror::Error;

use crate::kind::KindError;
use crate::models::ModelError;
use crate::naming::NamingError;

/// Errors reported by the command-line tool
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Kind(#[from] KindError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
