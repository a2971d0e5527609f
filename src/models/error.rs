//! Error types for the schema model

use thiserror::Error;

use crate::naming::NamingError;

/// Errors raised while loading a schema or deriving its storage layout
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    /// A derived identifier violates the naming strategy
    #[error(transparent)]
    Naming(#[from] NamingError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Json(e.to_string())
    }
}

impl From<serde_yaml::Error> for ModelError {
    fn from(e: serde_yaml::Error) -> Self {
        ModelError::Yaml(e.to_string())
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
